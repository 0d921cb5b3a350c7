use encouragebot::Config;
use serial_test::serial;
use std::time::Duration;

fn clear_optional_vars() {
    for name in [
        "DB_URL",
        "PORT",
        "QUOTE_API_URL",
        "QUOTE_TIMEOUT_SECS",
        "DB_TIMEOUT_SECS",
    ] {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn config_requires_token() {
    clear_optional_vars();
    std::env::remove_var("TELOXIDE_TOKEN");
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("TELOXIDE_TOKEN"));

    std::env::set_var("TELOXIDE_TOKEN", "   ");
    assert!(Config::from_env().is_err());
}

#[test]
#[serial]
fn config_defaults() {
    clear_optional_vars();
    std::env::set_var("TELOXIDE_TOKEN", "123:abc");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.bot_token, "123:abc");
    assert_eq!(cfg.db_url, "sqlite:encouragements.db");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.quote_url, "https://zenquotes.io/api/random");
    assert_eq!(cfg.quote_timeout, Duration::from_secs(5));
    assert_eq!(cfg.db_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn config_custom_values() {
    clear_optional_vars();
    std::env::set_var("TELOXIDE_TOKEN", "123:abc");
    std::env::set_var("DB_URL", "sqlite:other.db");
    std::env::set_var("PORT", "3000");
    std::env::set_var("QUOTE_API_URL", "http://localhost/quote");
    std::env::set_var("QUOTE_TIMEOUT_SECS", "2");
    std::env::set_var("DB_TIMEOUT_SECS", "9");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.db_url, "sqlite:other.db");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.quote_url, "http://localhost/quote");
    assert_eq!(cfg.quote_timeout, Duration::from_secs(2));
    assert_eq!(cfg.db_timeout, Duration::from_secs(9));
    clear_optional_vars();
}

#[test]
#[serial]
fn config_rejects_bad_port() {
    clear_optional_vars();
    std::env::set_var("TELOXIDE_TOKEN", "123:abc");
    std::env::set_var("PORT", "eighty");
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("PORT"));
    clear_optional_vars();
}
