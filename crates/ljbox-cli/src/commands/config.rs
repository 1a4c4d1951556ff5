use crate::config::defaults::DefaultsConfig;
use crate::config::file::FileConfig;
use crate::error::Result;

pub fn run() -> Result<()> {
    let text = FileConfig::from(&DefaultsConfig::default()).to_toml_string()?;
    print!("{}", text);
    Ok(())
}
