const USER_INPUT_LABEL: &str = "ユーザー入力:";

const REPLY_FORMAT: &str = r#"必ず以下の JSON フォーマットのみで応答してください。
数値は 0.0 ～ 1.0 の範囲で指定してください。

{
  "message": "string",
  "emotion": {
    "joy": 0.0,
    "anger": 0.0,
    "sadness": 0.0,
    "fun": 0.0
  }
}"#;

/// Build the single prompt sent upstream: character instructions, the player's
/// text verbatim, then the JSON-only reply contract.
pub fn compose_prompt(base_prompt: &str, text: &str) -> String {
    format!("{base_prompt}\n\n{USER_INPUT_LABEL}\n{text}\n\n{REPLY_FORMAT}\n")
}
