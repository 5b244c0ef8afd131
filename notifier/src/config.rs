use anyhow::anyhow;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::env;

pub const DEFAULT_SHORT_LOOKAHEAD_DAYS: i64 = 30;
pub const DEFAULT_LONG_LOOKAHEAD_DAYS: i64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub holidays_api_url: String,
    pub holidays_api_key: String,
    pub subscribers_api_url: String,
    pub smtp: SmtpConfig,
    pub template_path: String,
    pub time_zone: Tz,
    pub reference_date: Option<NaiveDate>,
    pub short_lookahead_days: i64,
    pub long_lookahead_days: i64,
    pub bind_addr: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub skip_send: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let holidays_api_url =
            env::var("HOLIDAYS_API_URL").map_err(|_| anyhow!("HOLIDAYS_API_URL must be set"))?;
        let holidays_api_key = env::var("HOLIDAYS_API_KEY").unwrap_or_default();
        let subscribers_api_url = env::var("SUBSCRIBERS_API_URL")
            .map_err(|_| anyhow!("SUBSCRIBERS_API_URL must be set"))?;

        let smtp = SmtpConfig {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .unwrap_or(465),
            username: env::var("EMAIL_ID").unwrap_or_default(),
            password: env::var("EMAIL_PWD").unwrap_or_default(),
            skip_send: env::var("SMTP_SKIP_SEND").unwrap_or_default() == "true",
        };

        let template_path =
            env::var("TEMPLATE_PATH").unwrap_or_else(|_| "templates/reminder.html".to_string());

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "Asia/Kolkata".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let reference_date = match env::var("REFERENCE_DATE") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| anyhow!("Invalid REFERENCE_DATE value: {}", raw))?,
            ),
            _ => None,
        };

        let short_lookahead_days = env::var("SHORT_LOOKAHEAD_DAYS")
            .unwrap_or_else(|_| DEFAULT_SHORT_LOOKAHEAD_DAYS.to_string())
            .parse()
            .unwrap_or(DEFAULT_SHORT_LOOKAHEAD_DAYS);

        let long_lookahead_days = env::var("LONG_LOOKAHEAD_DAYS")
            .unwrap_or_else(|_| DEFAULT_LONG_LOOKAHEAD_DAYS.to_string())
            .parse()
            .unwrap_or(DEFAULT_LONG_LOOKAHEAD_DAYS);

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Config {
            holidays_api_url,
            holidays_api_key,
            subscribers_api_url,
            smtp,
            template_path,
            time_zone,
            reference_date,
            short_lookahead_days,
            long_lookahead_days,
            bind_addr,
        })
    }

    /// Date the next invocation should plan from.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| crate::utils::time::today_local(&self.time_zone))
    }
}

pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}
