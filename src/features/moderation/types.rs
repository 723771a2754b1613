use serde::{Deserialize, Serialize};

/// Decision applied when resolving a flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlagResolution {
    pub action: String,
    pub comments: String,
}
