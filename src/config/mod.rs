use crate::core::client::DEFAULT_ENDPOINT;
use crate::core::render::BorderStyle;
use crate::utils::error::{Result, VerseError};
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const TOKEN_ENV: &str = "ESV_TOKEN";

pub const SETUP_INSTRUCTIONS: &str = "Please set the ESV_TOKEN environment variable with your ESV API key.
You can get a free API key at: https://api.esv.org/

Example: export ESV_TOKEN='your_api_key_here'";

#[derive(Debug, Clone, Parser)]
#[command(name = "verse")]
#[command(about = "Print a Bible passage from the ESV API, or a random one")]
pub struct CliConfig {
    /// Passage reference, e.g. John 3:16 (a random verse when omitted)
    #[arg(value_name = "REFERENCE")]
    pub reference: Vec<String>,

    #[arg(long, env = "ESV_TOKEN", hide_env_values = true, help = "ESV API key")]
    pub token: Option<String>,

    #[arg(long, env = "ESV_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Override the detected terminal width")]
    pub width: Option<u16>,

    #[arg(long, help = "Use ASCII borders instead of box-drawing characters")]
    pub ascii: bool,

    #[arg(long, help = "List the bundled references and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 參數以單一空白串接成經文位置；沒有參數則回傳 None
    pub fn explicit_reference(&self) -> Option<String> {
        if self.reference.is_empty() {
            None
        } else {
            Some(self.reference.join(" "))
        }
    }

    pub fn credential(&self) -> Result<&str> {
        validation::non_empty(self.token.as_deref()).ok_or(VerseError::MissingCredential)
    }

    pub fn border_style(&self) -> BorderStyle {
        if self.ascii {
            BorderStyle::Ascii
        } else {
            BorderStyle::Unicode
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        if let Some(width) = self.width {
            validation::validate_range("width", width, 1, 1000)?;
        }
        Ok(())
    }
}
