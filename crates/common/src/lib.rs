pub mod types;
pub mod utils;
pub mod admin_http;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status_field() {
        let h = types::Health::ok();
        let body = serde_json::to_value(&h).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }
}
