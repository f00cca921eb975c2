//! Global symbols under which CDN-loaded externals are exposed.

use crate::domain::AppError;

/// Packages whose exported global differs from their package name.
const EXPORTED_SYMBOLS: &[(&str, &str)] = &[("three", "THREE")];

/// Sub-modules resolved from their parent package's global.
const SUB_MODULES: &[(&str, &str)] = &[("rxjs", "operators")];

/// API key of a version or caret range: the major version, or `0<minor>`
/// while the major is zero (`^0.2.3 -> 02`, `^3.0.0 -> 3`).
pub fn api_key(range: &str) -> Result<String, AppError> {
    let version = range.trim_start_matches(['^', '~', '=', 'v']);
    let mut parts = version.split('.');
    let major = numeric_part(parts.next(), range)?;
    if major > 0 {
        return Ok(major.to_string());
    }
    let minor = numeric_part(parts.next(), range)?;
    Ok(format!("0{}", minor))
}

fn numeric_part(part: Option<&str>, range: &str) -> Result<u64, AppError> {
    let digits: String =
        part.unwrap_or_default().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits
        .parse()
        .map_err(|_| AppError::Generation(format!("Unsupported version range '{}'", range)))
}

/// Global symbol a package is exported under.
pub fn exported_symbol(package: &str) -> &str {
    EXPORTED_SYMBOLS
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(package)
}

/// A module id and the `window[...]` expression resolving it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ModuleExternal {
    pub module: String,
    pub global: String,
}

/// Module externals for one package: the package itself, then its known sub-modules.
pub fn module_externals(package: &str, range: &str) -> Result<Vec<ModuleExternal>, AppError> {
    let base = format!("window['{}_APIv{}']", exported_symbol(package), api_key(range)?);
    let mut externals = vec![ModuleExternal { module: package.to_string(), global: base.clone() }];
    for (_, sub) in SUB_MODULES.iter().filter(|(parent, _)| *parent == package) {
        externals.push(ModuleExternal {
            module: format!("{}/{}", package, sub),
            global: format!("{}['{}']", base, sub),
        });
    }
    Ok(externals)
}
