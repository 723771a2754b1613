pub mod probe;

use secrecy::SecretString;

/// Action resolved from the command line.
#[derive(Debug)]
pub enum Action {
    Discussions,
    Members,
    Traffic { location: Option<String> },
    Environmental { location: Option<String> },
    Transit,
    Route { id: String },
    Vehicle { id: String },
    Alerts,
    Flags { status: String },
    Login { email: String, password: SecretString },
}
