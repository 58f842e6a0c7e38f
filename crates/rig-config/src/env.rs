//! Process-environment snapshot.
//!
//! The generator itself never reads ambient process state. Callers capture
//! an [`EnvOverrides`] once at startup and pass it in, which keeps
//! generation pure and lets tests fabricate any environment they need.

use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Prefix shared by every environment variable the generator honors.
pub const ENV_PREFIX: &str = "RIG_";

/// Snapshot of the build-affecting environment variables.
///
/// Exactly five variables are read: `RIG_API_STAGE`, `RIG_LOCAL_BACKEND`,
/// `RIG_LOCAL_SOCKET`, `RIG_LOCAL_CHECKOUT` and `RIG_TEST_PROD_BUILD`.
/// Values are kept raw; flag semantics (set means present and non-empty)
/// are applied during stage resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvOverrides {
    /// Raw API-stage selector (`RIG_API_STAGE`).
    #[serde(deserialize_with = "scalar_text")]
    pub api_stage: Option<String>,
    /// Raw local-backend flag (`RIG_LOCAL_BACKEND`).
    #[serde(deserialize_with = "scalar_text")]
    pub local_backend: Option<String>,
    /// Raw local-socket flag (`RIG_LOCAL_SOCKET`).
    #[serde(deserialize_with = "scalar_text")]
    pub local_socket: Option<String>,
    /// Raw local-checkout flag (`RIG_LOCAL_CHECKOUT`).
    #[serde(deserialize_with = "scalar_text")]
    pub local_checkout: Option<String>,
    /// Raw force-production-test flag (`RIG_TEST_PROD_BUILD`).
    #[serde(deserialize_with = "scalar_text")]
    pub test_prod_build: Option<String>,
}

impl EnvOverrides {
    /// Capture a snapshot from the current process environment.
    pub fn capture() -> Result<Self> {
        let snapshot = Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(snapshot)
    }

    /// The API-stage selector, treating an empty value as unset.
    pub fn api_stage(&self) -> Option<&str> {
        self.api_stage.as_deref().filter(|value| !value.is_empty())
    }
}

/// Variable values are type-inferred from their spelling during capture
/// (`1` arrives as an integer, `true` as a bool). The snapshot keeps the
/// literal text, so every inferred scalar is rendered back to its source
/// form.
fn scalar_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Text(String),
    }

    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(scalar.map(|scalar| match scalar {
        Scalar::Bool(flag) => flag.to_string(),
        Scalar::Unsigned(number) => number.to_string(),
        Scalar::Signed(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Text(text) => text,
    }))
}

/// Whether a flag variable counts as set: present with a non-empty value.
///
/// The literal content is irrelevant; `"0"` and `"false"` still count.
pub(crate) fn flag_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|raw| !raw.is_empty())
}
