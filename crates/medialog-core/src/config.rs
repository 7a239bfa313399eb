/// Loads a configuration struct from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `database_url` is read
/// from `DATABASE_URL` (or `{PREFIX}DATABASE_URL` when [`Config::PREFIX`]
/// is set). Missing optional fields fall back to their serde defaults.
pub trait Config: Sized + serde::de::DeserializeOwned {
    const PREFIX: Option<&'static str> = None;

    fn from_env() -> Result<Self, envy::Error> {
        match Self::PREFIX {
            Some(prefix) => envy::prefixed(prefix).from_env(),
            None => envy::from_env(),
        }
    }

    /// Same as [`Config::from_env`] over an explicit set of variables.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        match Self::PREFIX {
            Some(prefix) => envy::prefixed(prefix).from_iter(vars),
            None => envy::from_iter(vars),
        }
    }
}
