/// Successful TextBelt `text` response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendTextResponse {
    pub text_id: Option<String>,
    pub quota_remaining: Option<i64>,
}
