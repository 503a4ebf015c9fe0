use super::*;

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("https://api.example.com", "api/auth/me"), "https://api.example.com/api/auth/me");
    assert_eq!(join_url("https://api.example.com/", "/api/auth/me"), "https://api.example.com/api/auth/me");
}

#[test]
fn join_url_with_root_base_yields_absolute_path() {
    assert_eq!(join_url("/", "api/auth/login"), "/api/auth/login");
}

#[test]
fn endpoints_cover_all_auth_operations() {
    let endpoints = AuthEndpoints::new("https://bikes.example/");
    assert_eq!(endpoints.login, "https://bikes.example/api/auth/login");
    assert_eq!(endpoints.logout, "https://bikes.example/api/auth/logout");
    assert_eq!(endpoints.register, "https://bikes.example/api/auth/register");
    assert_eq!(endpoints.me, "https://bikes.example/api/auth/me");
}

#[test]
fn default_endpoints_use_compiled_base() {
    assert_eq!(AuthEndpoints::default(), AuthEndpoints::new(API_BASE_URL));
}
