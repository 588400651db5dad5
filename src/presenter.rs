use serde::{Deserialize, Serialize};

use crate::ranking::RankedPlayer;

/// What the result modal shows. Serialized as
/// `{"kind": "dice" | "roulette", "content": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Presentation {
    Dice(Vec<RankedPlayer>),
    Roulette(String),
}

impl Presentation {
    pub fn title(&self) -> &'static str {
        match self {
            Presentation::Dice(_) => "🎲 Dice Game Results",
            Presentation::Roulette(_) => "🎡 Roulette Result",
        }
    }

    /// One-line JSON for the console log.
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("<unserializable result>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roulette_result_is_tagged() {
        let p = Presentation::Roulette("Pizza".into());
        let v: serde_json::Value = serde_json::from_str(&p.to_log_line()).unwrap();
        assert_eq!(v, json!({ "kind": "roulette", "content": "Pizza" }));
    }

    #[test]
    fn dice_result_carries_ranked_rows() {
        let p = Presentation::Dice(vec![RankedPlayer {
            rank: 1,
            name: "Ann".into(),
            rolls: vec![6, 5, 4],
            sum: 15,
            is_winner: true,
            is_loser: true,
        }]);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["kind"], "dice");
        assert_eq!(v["content"][0]["rank"], 1);
        assert_eq!(v["content"][0]["rolls"], json!([6, 5, 4]));
        assert_eq!(v["content"][0]["is_loser"], true);
    }
}
