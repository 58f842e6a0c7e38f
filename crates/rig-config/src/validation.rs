//! Request validation.
//!
//! Split in two layers so in-memory callers can validate without touching
//! disk: [`validate_schema`] checks field invariants alone, [`validate`]
//! adds the filesystem checks and is what [`generate`] runs.
//!
//! [`generate`]: crate::generate

use crate::error::{ConfigError, Result};
use crate::request::BuildRequest;

/// Field-level checks needing no filesystem access.
pub fn validate_schema(request: &BuildRequest) -> Result<()> {
    if !request.project_root.is_absolute() {
        return Err(ConfigError::invalid(
            "project_root",
            format!(
                "must be an absolute path (got `{}`)",
                request.project_root.display()
            ),
        ));
    }

    if request.entry.trim().is_empty() {
        return Err(ConfigError::invalid(
            "entry",
            "must name a bundle entry point",
        ));
    }

    // Port 0 asks the OS for an arbitrary port, which the generated
    // document could never advertise.
    if request.dev_server_port == 0 {
        return Err(ConfigError::invalid(
            "dev_server_port",
            "port 0 is not routable; expected 1-65535",
        ));
    }

    if request
        .global_stylesheet_names
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(ConfigError::invalid(
            "global_stylesheet_names",
            "entries must be non-empty stylesheet names",
        ));
    }

    Ok(())
}

/// Schema checks plus filesystem checks.
pub fn validate(request: &BuildRequest) -> Result<()> {
    validate_schema(request)?;

    if !request.project_root.is_dir() {
        return Err(ConfigError::invalid(
            "project_root",
            format!(
                "`{}` is not an existing directory",
                request.project_root.display()
            ),
        ));
    }

    if let Some(favicon) = request.resolved_favicon() {
        if !favicon.is_file() {
            return Err(ConfigError::invalid(
                "favicon",
                format!("`{}` does not exist", favicon.display()),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rejects(request: &BuildRequest, field: &str) {
        match validate_schema(request) {
            Err(ConfigError::InvalidConfiguration { field: reported, .. }) => {
                assert_eq!(reported, field)
            }
            other => panic!("expected InvalidConfiguration for {field}, got {other:?}"),
        }
    }

    #[test]
    fn relative_roots_are_rejected() {
        assert_rejects(&BuildRequest::new("relative/root"), "project_root");
    }

    #[test]
    fn blank_entries_are_rejected() {
        assert_rejects(&BuildRequest::new("/srv/app").with_entry("  "), "entry");
    }

    #[test]
    fn port_zero_is_rejected() {
        assert_rejects(
            &BuildRequest::new("/srv/app").with_dev_server_port(0),
            "dev_server_port",
        );
    }

    #[test]
    fn blank_stylesheet_names_are_rejected() {
        let request = BuildRequest::new("/srv/app")
            .with_global_stylesheets(vec!["grid".to_string(), "   ".to_string()]);
        assert_rejects(&request, "global_stylesheet_names");
    }

    #[test]
    fn an_empty_stylesheet_list_is_valid() {
        let request = BuildRequest::new("/srv/app").with_global_stylesheets(Vec::new());
        assert!(validate_schema(&request).is_ok());
    }
}
