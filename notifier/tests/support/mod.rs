#![allow(dead_code)]
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use weekend_notifier::{
    config::{Config, SmtpConfig},
    error::NotifierError,
    models::{
        holiday::{Holiday, HolidayType},
        notification::DeliveryRequest,
        weekend::Preference,
    },
    services::{
        holiday_source::HolidaySource, long_weekend::LookaheadWindows,
        notifier::NotificationOrchestrator, subscriber_source::SubscriberSource,
    },
    utils::{email::Mailer, template::ReminderTemplate},
};

pub const TEST_TEMPLATE: &str = "<h1>{{title}}</h1><p>{{message}}</p>";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn gazetted(on: NaiveDate, name: &str, day: &str) -> Holiday {
    Holiday::new(on, name, HolidayType::Gazetted, day)
}

pub fn republic_day() -> Holiday {
    gazetted(date(2024, 1, 26), "Republic Day", "Friday")
}

pub struct StaticHolidays {
    holidays: Vec<Holiday>,
    pub requested_years: Mutex<Vec<i32>>,
}

impl StaticHolidays {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self {
            holidays,
            requested_years: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HolidaySource for StaticHolidays {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, NotifierError> {
        self.requested_years.lock().expect("lock years").push(year);
        Ok(self.holidays.clone())
    }
}

pub struct FailingHolidays;

#[async_trait]
impl HolidaySource for FailingHolidays {
    async fn fetch_holidays(&self, _year: i32) -> Result<Vec<Holiday>, NotifierError> {
        let source = reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("request without host");
        Err(NotifierError::HolidayFetch(source))
    }
}

pub struct StaticSubscribers {
    subscribers: Vec<String>,
    pub requested: Mutex<Vec<Preference>>,
}

impl StaticSubscribers {
    pub fn new(subscribers: &[&str]) -> Self {
        Self {
            subscribers: subscribers.iter().map(|s| s.to_string()).collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<Preference> {
        self.requested.lock().expect("lock requested").clone()
    }
}

#[async_trait]
impl SubscriberSource for StaticSubscribers {
    async fn fetch_subscribers(
        &self,
        preference: Preference,
    ) -> Result<Vec<String>, NotifierError> {
        self.requested.lock().expect("lock requested").push(preference);
        Ok(self.subscribers.clone())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<DeliveryRequest>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<DeliveryRequest> {
        self.sent.lock().expect("lock sent").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, request: DeliveryRequest) -> Result<(), NotifierError> {
        self.sent.lock().expect("lock sent").push(request);
        if self.fail {
            let address = "rejected-recipient".to_string();
            let source = address
                .parse::<lettre::Address>()
                .expect_err("rejected recipient");
            return Err(NotifierError::InvalidAddress { address, source });
        }
        Ok(())
    }
}

pub struct Harness {
    pub holidays: Arc<StaticHolidays>,
    pub subscribers: Arc<StaticSubscribers>,
    pub mailer: Arc<RecordingMailer>,
    pub notifier: NotificationOrchestrator,
}

pub fn harness(
    holidays: Vec<Holiday>,
    subscribers: &[&str],
    mailer: RecordingMailer,
    windows: LookaheadWindows,
) -> Harness {
    let holidays = Arc::new(StaticHolidays::new(holidays));
    let subscribers = Arc::new(StaticSubscribers::new(subscribers));
    let mailer = Arc::new(mailer);
    let notifier = NotificationOrchestrator::new(
        holidays.clone(),
        subscribers.clone(),
        mailer.clone(),
        ReminderTemplate::new(TEST_TEMPLATE),
        windows,
    );

    Harness {
        holidays,
        subscribers,
        mailer,
        notifier,
    }
}

pub fn test_config(reference_date: Option<NaiveDate>) -> Config {
    Config {
        holidays_api_url: "http://127.0.0.1:9/holidays".into(),
        holidays_api_key: "test-key".into(),
        subscribers_api_url: "http://127.0.0.1:9/users".into(),
        smtp: SmtpConfig {
            host: "localhost".into(),
            port: 2525,
            username: String::new(),
            password: String::new(),
            skip_send: true,
        },
        template_path: "templates/reminder.html".into(),
        time_zone: chrono_tz::Asia::Kolkata,
        reference_date,
        short_lookahead_days: 30,
        long_lookahead_days: 120,
        bind_addr: "127.0.0.1:0".into(),
    }
}
