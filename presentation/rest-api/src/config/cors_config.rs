use poem::middleware::Cors;
use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4200,http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for the web frontend
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: the Angular dev server plus common local ports)
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "accept"])
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_angular_dev_server_by_default() {
        let origins = parse_origins(DEFAULT_ALLOWED_ORIGINS);
        assert!(origins.contains(&"http://localhost:4200".to_string()));
    }

    #[test]
    fn should_ignore_blank_entries_and_whitespace() {
        let origins = parse_origins(" https://prices.example.com, ,http://localhost:4200 ");
        assert_eq!(
            origins,
            vec!["https://prices.example.com", "http://localhost:4200"]
        );
    }
}
