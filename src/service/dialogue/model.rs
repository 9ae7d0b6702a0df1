use serde::{Deserialize, Serialize};

use crate::service::locale::Language;

/// Per-chat state kept between updates.
#[derive(Clone, Default, Serialize, Deserialize, Debug, PartialEq)]
pub struct SessionState {
    pub language: Language,
}
