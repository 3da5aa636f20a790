// src/gateway/params.rs

use tracing::debug;

/// Recognized query parameter names, in the exact order the save-settings
/// script expects its positional arguments.
///
/// This order is a contract with the script and must only change together
/// with it.
pub const PARAM_MINIMAL_BACKUP: &str = "MINIMAL_BACKUP_REMOTE";
pub const PARAM_REMOTE_CONFIG: &str = "RCLONE_CONFIG_REMOTE";
pub const PARAM_REMOTE_PATH: &str = "REMOTE_PATH_IN_CONFIG";
pub const PARAM_BACKUPS_TO_KEEP: &str = "BACKUPS_TO_KEEP_REMOTE";
pub const PARAM_DRY_RUN: &str = "DRY_RUN_REMOTE";
pub const PARAM_NOTIFICATIONS: &str = "NOTIFICATIONS_REMOTE";

/// A single request parameter value: either a scalar or a multi-valued
/// field collected from repeated keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Normalize the value into the single string used as a positional
    /// argument.
    ///
    /// List values are trimmed per element and joined with `,`. Scalar
    /// values pass through untrimmed; the asymmetry mirrors the web form's
    /// existing behaviour and is kept deliberately (see DESIGN.md).
    pub fn normalized(&self) -> String {
        match self {
            ParamValue::Scalar(s) => s.clone(),
            ParamValue::List(items) => items
                .iter()
                .map(|s| s.trim())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Ordered mapping of request parameter names to values, built from the
/// decoded query pairs of the inbound request.
///
/// A key that appears more than once, or that carries the HTML-form `[]`
/// suffix, collects into a [`ParamValue::List`]. Unknown keys are kept in
/// the map but simply never looked up.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = RequestParams::default();
        for (key, value) in pairs {
            let raw_key = key.as_ref();
            let (name, forced_list) = match raw_key.strip_suffix("[]") {
                Some(base) => (base, true),
                None => (raw_key, false),
            };
            params.push(name, value.into(), forced_list);
        }
        params
    }

    fn push(&mut self, name: &str, value: String, forced_list: bool) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| k == name) {
            // Second occurrence of a key upgrades the entry to a list.
            match existing {
                ParamValue::List(items) => items.push(value),
                ParamValue::Scalar(first) => {
                    let first = std::mem::take(first);
                    *existing = ParamValue::List(vec![first, value]);
                }
            }
            return;
        }

        let entry = if forced_list {
            ParamValue::List(vec![value])
        } else {
            ParamValue::Scalar(value)
        };
        self.entries.push((name.to_string(), entry));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

/// The six save-settings fields, typed and named.
///
/// `None` means the parameter was absent from the request; it becomes an
/// empty positional argument. Missing fields are never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSettingsParams {
    pub minimal_backup: Option<String>,
    pub remote_config: Option<String>,
    pub remote_path: Option<String>,
    pub backups_to_keep: Option<String>,
    pub dry_run: Option<String>,
    pub notifications: Option<String>,
}

impl SaveSettingsParams {
    /// Extract the six recognized fields from the raw request parameters,
    /// applying list normalization. Unknown parameters are ignored.
    pub fn from_request(params: &RequestParams) -> Self {
        let field = |name: &str| params.get(name).map(ParamValue::normalized);

        let settings = SaveSettingsParams {
            minimal_backup: field(PARAM_MINIMAL_BACKUP),
            remote_config: field(PARAM_REMOTE_CONFIG),
            remote_path: field(PARAM_REMOTE_PATH),
            backups_to_keep: field(PARAM_BACKUPS_TO_KEEP),
            dry_run: field(PARAM_DRY_RUN),
            notifications: field(PARAM_NOTIFICATIONS),
        };
        debug!(?settings, "extracted save-settings parameters");
        settings
    }

    /// Project the fields into the positional argument vector, in the fixed
    /// order the script expects. Always exactly six entries; absent fields
    /// become empty strings.
    pub fn to_argv(&self) -> [String; 6] {
        let arg = |f: &Option<String>| f.clone().unwrap_or_default();
        [
            arg(&self.minimal_backup),
            arg(&self.remote_config),
            arg(&self.remote_path),
            arg(&self.backups_to_keep),
            arg(&self.dry_run),
            arg(&self.notifications),
        ]
    }
}
