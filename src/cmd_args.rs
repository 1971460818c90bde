use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name in the config file. Default is 'default'.
    /// A profile that is not configured falls back to the built-in defaults.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Overrides the profile's api_origin
    #[clap(short = 'o', long, help = "auction API origin, e.g. https://host")]
    api_origin: Option<String>,

    #[clap(short = 'v', long, help = "log debug output")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    api_origin: Option<String>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            api_origin: args.api_origin,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn api_origin(&self) -> Option<&str> {
        self.api_origin.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
