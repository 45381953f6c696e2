//! Wire format for control action codes.
//!
//! Every rendered control carries a compact string the host echoes back on
//! activation: `shop:<generation>:<action>`, where `<action>` is `prev`,
//! `next`, `refresh`, `filter` (show all), or `filter:<tag>`. The
//! generation segment is what lets the gateway detect activations of
//! controls rendered for an older session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shopfront_core::nav::NavAction;
use thiserror::Error;

const PREFIX: &str = "shop";

/// Malformed action-code strings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCodeError {
    #[error("action code '{0}' does not start with '{PREFIX}:'")]
    BadPrefix(String),

    #[error("action code '{0}' has a non-numeric generation segment")]
    BadGeneration(String),

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

/// A typed control activation: which transition, and for which session
/// generation the control was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCode {
    pub generation: u64,
    pub action: NavAction,
}

impl ActionCode {
    pub fn new(generation: u64, action: NavAction) -> Self {
        Self { generation, action }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}:{}:", self.generation)?;
        match &self.action {
            NavAction::PrevPage => write!(f, "prev"),
            NavAction::NextPage => write!(f, "next"),
            NavAction::Refresh => write!(f, "refresh"),
            NavAction::SetFilter { tag: None } => write!(f, "filter"),
            NavAction::SetFilter { tag: Some(tag) } => write!(f, "filter:{tag}"),
        }
    }
}

impl FromStr for ActionCode {
    type Err = ActionCodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let rest = code
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| ActionCodeError::BadPrefix(code.to_string()))?;
        let (generation, action) = rest
            .split_once(':')
            .ok_or_else(|| ActionCodeError::UnknownAction(code.to_string()))?;
        let generation: u64 = generation
            .parse()
            .map_err(|_| ActionCodeError::BadGeneration(code.to_string()))?;
        // Tags may themselves contain ':', so only the first segment of the
        // action part is significant.
        let action = match action.split_once(':') {
            Some(("filter", tag)) => NavAction::SetFilter {
                tag: Some(tag.to_string()),
            },
            None => match action {
                "prev" => NavAction::PrevPage,
                "next" => NavAction::NextPage,
                "refresh" => NavAction::Refresh,
                "filter" => NavAction::SetFilter { tag: None },
                other => return Err(ActionCodeError::UnknownAction(other.to_string())),
            },
            Some((other, _)) => return Err(ActionCodeError::UnknownAction(other.to_string())),
        };
        Ok(Self { generation, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_action() {
        let codes = [
            ActionCode::new(0, NavAction::PrevPage),
            ActionCode::new(7, NavAction::NextPage),
            ActionCode::new(3, NavAction::Refresh),
            ActionCode::new(1, NavAction::SetFilter { tag: None }),
            ActionCode::new(
                12,
                NavAction::SetFilter {
                    tag: Some("cereal".to_string()),
                },
            ),
        ];
        for code in codes {
            let encoded = code.to_string();
            assert_eq!(encoded.parse::<ActionCode>().unwrap(), code, "{encoded}");
        }
    }

    #[test]
    fn encodes_expected_strings() {
        assert_eq!(ActionCode::new(4, NavAction::NextPage).to_string(), "shop:4:next");
        assert_eq!(
            ActionCode::new(0, NavAction::SetFilter { tag: None }).to_string(),
            "shop:0:filter"
        );
    }

    #[test]
    fn filter_tags_may_contain_colons() {
        let code: ActionCode = "shop:2:filter:food:cereal".parse().unwrap();
        assert_eq!(code.generation, 2);
        assert_eq!(
            code.action,
            NavAction::SetFilter {
                tag: Some("food:cereal".to_string())
            }
        );
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(matches!(
            "cart:0:next".parse::<ActionCode>(),
            Err(ActionCodeError::BadPrefix(_))
        ));
        assert!(matches!(
            "shop:x:next".parse::<ActionCode>(),
            Err(ActionCodeError::BadGeneration(_))
        ));
        assert!(matches!(
            "shop:0:teleport".parse::<ActionCode>(),
            Err(ActionCodeError::UnknownAction(_))
        ));
        assert!(matches!(
            "shop:0".parse::<ActionCode>(),
            Err(ActionCodeError::UnknownAction(_))
        ));
    }
}
