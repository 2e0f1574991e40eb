use serde::{Deserialize, Serialize};

/// Presentation mode a master account can switch between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Student,
    Lab,
}

/// Account details carried inside a session identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lab_name: String,
}

/// Explicit session identity carried by mutating requests, replacing ambient
/// auth state. A master account presents as either side via its selected
/// mode; the mode is session state, not an account attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
    Student { profile: Profile },
    Lab { profile: Profile },
    Master {
        #[serde(default)]
        mode: SessionMode,
        profile: Profile,
    },
}

/// Role a request is acting under, resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRole {
    Student,
    Lab,
}

impl Identity {
    pub fn effective_role(&self) -> EffectiveRole {
        match self {
            Identity::Student { .. } => EffectiveRole::Student,
            Identity::Lab { .. } => EffectiveRole::Lab,
            Identity::Master { mode, .. } => match mode {
                SessionMode::Student => EffectiveRole::Student,
                SessionMode::Lab => EffectiveRole::Lab,
            },
        }
    }

    pub fn profile(&self) -> &Profile {
        match self {
            Identity::Student { profile }
            | Identity::Lab { profile }
            | Identity::Master { profile, .. } => profile,
        }
    }

    /// The profile this session may own notices under, i.e. only when acting
    /// as a lab.
    pub fn lab_profile(&self) -> Option<&Profile> {
        match self.effective_role() {
            EffectiveRole::Lab => Some(self.profile()),
            EffectiveRole::Student => None,
        }
    }
}
