use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    #[serde(default)]
    pub joy: f64,
    #[serde(default)]
    pub anger: f64,
    #[serde(default)]
    pub sadness: f64,
    #[serde(default)]
    pub fun: f64,
}
