use std::path::Path;

use clap::Args;
use dbusig_core::SignatureOptions;

use crate::CliError;

/// Command-line overrides for signature options.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// TOML profile with signature options; flags below take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,
    /// Maximum type codes in one complete type.
    #[arg(long, allow_negative_numbers = true)]
    pub max_codes: Option<i64>,
    /// Minimum complete types per signature.
    #[arg(long, allow_negative_numbers = true)]
    pub min_complete_types: Option<i64>,
    /// Maximum complete types per signature.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "unbounded_complete_types")]
    pub max_complete_types: Option<i64>,
    /// Remove the upper bound on complete types.
    #[arg(long, default_value_t = false)]
    pub unbounded_complete_types: bool,
    /// Minimum members per struct.
    #[arg(long, allow_negative_numbers = true)]
    pub min_struct_len: Option<i64>,
    /// Maximum members per struct.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "unbounded_struct_len")]
    pub max_struct_len: Option<i64>,
    /// Remove the upper bound on struct members.
    #[arg(long, default_value_t = false)]
    pub unbounded_struct_len: bool,
    /// Never generate arrays.
    #[arg(long, default_value_t = false)]
    pub exclude_arrays: bool,
    /// Never generate dict entries.
    #[arg(long, default_value_t = false)]
    pub exclude_dicts: bool,
    /// Never generate structs.
    #[arg(long, default_value_t = false)]
    pub exclude_structs: bool,
    /// Symbols that must not appear, e.g. "vh(".
    #[arg(long, value_name = "SYMBOLS")]
    pub exclude: Option<String>,
    /// Symbols a top-level complete type may begin with, e.g. "s(".
    #[arg(long, value_name = "SYMBOLS")]
    pub start_symbols: Option<String>,
    /// Charge dict keys against the code limit.
    #[arg(long, default_value_t = false)]
    pub strict_leaf_cap: bool,
}

impl OptionArgs {
    /// Resolve the profile (if any) and apply the flags on top of it.
    pub fn resolve(&self) -> Result<SignatureOptions, CliError> {
        let base = match &self.config {
            Some(path) => load_profile(path)?,
            None => SignatureOptions::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut options: SignatureOptions) -> SignatureOptions {
        if let Some(value) = self.max_codes {
            options.max_codes = value;
        }
        if let Some(value) = self.min_complete_types {
            options.min_complete_types = value;
        }
        if self.unbounded_complete_types {
            options.max_complete_types = None;
        } else if let Some(value) = self.max_complete_types {
            options.max_complete_types = Some(value);
        }
        if let Some(value) = self.min_struct_len {
            options.min_struct_len = value;
        }
        if self.unbounded_struct_len {
            options.max_struct_len = None;
        } else if let Some(value) = self.max_struct_len {
            options.max_struct_len = Some(value);
        }
        options.exclude_arrays |= self.exclude_arrays;
        options.exclude_dicts |= self.exclude_dicts;
        options.exclude_structs |= self.exclude_structs;
        options.strict_leaf_cap |= self.strict_leaf_cap;
        if let Some(symbols) = &self.exclude {
            let mut merged = options.exclusion_list.take().unwrap_or_default();
            merged.push_str(symbols);
            options.exclusion_list = Some(merged);
        }
        if let Some(symbols) = &self.start_symbols {
            options.start_symbols = Some(symbols.clone());
        }
        options
    }
}

pub fn load_profile(path: &Path) -> Result<SignatureOptions, CliError> {
    let content = std::fs::read_to_string(path)?;
    let options: SignatureOptions = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "profile loaded");
    Ok(options)
}
