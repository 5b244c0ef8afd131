//! One invocation: fetch holidays, detect a long weekend, remind subscribers.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::{
    config::Config,
    error::NotifierError,
    models::notification::{DeliveryRequest, NotificationOutcome},
    services::{
        holiday_source::{HolidaySource, HttpHolidaySource},
        long_weekend::{holiday_ranges, select_weekend, LookaheadWindows},
        reminder::compose,
        subscriber_source::{HttpSubscriberSource, SubscriberSource},
    },
    utils::{
        email::{Mailer, SmtpMailer},
        template::ReminderTemplate,
    },
};

#[derive(Clone)]
pub struct NotificationOrchestrator {
    holidays: Arc<dyn HolidaySource>,
    subscribers: Arc<dyn SubscriberSource>,
    mailer: Arc<dyn Mailer>,
    template: Arc<ReminderTemplate>,
    windows: LookaheadWindows,
}

impl NotificationOrchestrator {
    pub fn new(
        holidays: Arc<dyn HolidaySource>,
        subscribers: Arc<dyn SubscriberSource>,
        mailer: Arc<dyn Mailer>,
        template: ReminderTemplate,
        windows: LookaheadWindows,
    ) -> Self {
        Self {
            holidays,
            subscribers,
            mailer,
            template: Arc::new(template),
            windows,
        }
    }

    /// Wires the HTTP sources, SMTP mailer and on-disk template from configuration.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("weekend-notifier/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;

        let holidays = HttpHolidaySource::new(
            client.clone(),
            config.holidays_api_url.clone(),
            config.holidays_api_key.clone(),
        );
        let subscribers = HttpSubscriberSource::new(client, config.subscribers_api_url.clone());
        let mailer = SmtpMailer::new(config.smtp.clone());
        let template = ReminderTemplate::load(&config.template_path).await?;

        Ok(Self::new(
            Arc::new(holidays),
            Arc::new(subscribers),
            Arc::new(mailer),
            template,
            LookaheadWindows {
                short_days: config.short_lookahead_days,
                long_days: config.long_lookahead_days,
            },
        ))
    }

    /// Runs an invocation and never fails; errors become [`NotificationOutcome::Failed`].
    pub async fn run(&self, reference: NaiveDate) -> NotificationOutcome {
        match self.try_run(reference).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Weekend notification failed");
                NotificationOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub async fn try_run(&self, reference: NaiveDate) -> Result<NotificationOutcome, NotifierError> {
        let year = reference.year();
        let holidays = self.holidays.fetch_holidays(year).await?;
        let ranges = holiday_ranges(&holidays);
        tracing::info!(
            year,
            holidays = holidays.len(),
            ranges = ranges.len(),
            %reference,
            "Loaded holiday calendar"
        );

        let Some(weekend) = select_weekend(&ranges, reference, self.windows) else {
            tracing::info!("Long weekend not detected, skipping notification");
            return Ok(NotificationOutcome::NoLongWeekend);
        };

        let preference = weekend.preference();
        let holiday = weekend.range.holiday().name.clone();
        tracing::info!(
            %preference,
            holiday = %holiday,
            start = %weekend.range.start(),
            end = %weekend.range.end(),
            "Long weekend detected"
        );

        let recipients = self.subscribers.fetch_subscribers(preference).await?;
        if recipients.is_empty() {
            tracing::info!(%preference, "No subscribers found, skipping email notification");
            return Ok(NotificationOutcome::NoSubscribers { preference });
        }

        let content = compose(&weekend);
        let html_body = self.template.render(&content)?;
        let count = recipients.len();
        self.mailer
            .send(DeliveryRequest::reminder(recipients, html_body))
            .await?;
        tracing::info!(%preference, recipients = count, holiday = %holiday, "Reminder sent");

        Ok(NotificationOutcome::Delivered {
            preference,
            recipients: count,
            holiday,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            holiday::{Holiday, HolidayType},
            weekend::Preference,
        },
        services::{holiday_source::MockHolidaySource, subscriber_source::MockSubscriberSource},
        utils::email::MockMailer,
    };
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn republic_day() -> Holiday {
        Holiday::new(date(2024, 1, 26), "Republic Day", HolidayType::Gazetted, "Friday")
    }

    fn late_holiday() -> Holiday {
        Holiday::new(date(2024, 4, 26), "Late Holiday", HolidayType::Gazetted, "Friday")
    }

    fn orchestrator(
        holidays: MockHolidaySource,
        subscribers: MockSubscriberSource,
        mailer: MockMailer,
        windows: LookaheadWindows,
    ) -> NotificationOrchestrator {
        NotificationOrchestrator::new(
            Arc::new(holidays),
            Arc::new(subscribers),
            Arc::new(mailer),
            ReminderTemplate::new("<h1>{{title}}</h1><p>{{message}}</p>"),
            windows,
        )
    }

    fn holidays_returning(list: Vec<Holiday>) -> MockHolidaySource {
        let mut source = MockHolidaySource::new();
        source
            .expect_fetch_holidays()
            .with(eq(2024))
            .times(1)
            .returning(move |_| Ok(list.clone()));
        source
    }

    #[tokio::test]
    async fn prefers_long_horizon_and_irctc_subscribers() {
        let mut subscribers = MockSubscriberSource::new();
        subscribers
            .expect_fetch_subscribers()
            .with(eq(Preference::Irctc))
            .times(1)
            .returning(|_| Ok(vec!["a@example.com".into(), "b@example.com".into()]));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|request| {
                request.recipients.len() == 2
                    && request.html_body.contains("Late Holiday")
                    && request.html_body.contains("IRCTC opens booking today")
            })
            .times(1)
            .returning(|_| Ok(()));

        let notifier = orchestrator(
            holidays_returning(vec![republic_day(), late_holiday()]),
            subscribers,
            mailer,
            LookaheadWindows {
                short_days: 25,
                long_days: 116,
            },
        );

        let outcome = notifier.run(date(2024, 1, 1)).await;
        assert_eq!(
            outcome,
            NotificationOutcome::Delivered {
                preference: Preference::Irctc,
                recipients: 2,
                holiday: "Late Holiday".into(),
            }
        );
    }

    #[tokio::test]
    async fn short_horizon_uses_upcoming_without_urgency() {
        let mut subscribers = MockSubscriberSource::new();
        subscribers
            .expect_fetch_subscribers()
            .with(eq(Preference::Upcoming))
            .times(1)
            .returning(|_| Ok(vec!["a@example.com".into()]));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|request| {
                request.html_body.contains("Three days of long weekend")
                    && request.html_body.contains("<p></p>")
            })
            .times(1)
            .returning(|_| Ok(()));

        let notifier = orchestrator(
            holidays_returning(vec![republic_day()]),
            subscribers,
            mailer,
            LookaheadWindows {
                short_days: 25,
                long_days: 120,
            },
        );

        assert!(notifier.run(date(2024, 1, 1)).await.is_delivered());
    }

    #[tokio::test]
    async fn empty_subscriber_list_skips_delivery() {
        let mut subscribers = MockSubscriberSource::new();
        subscribers
            .expect_fetch_subscribers()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let notifier = orchestrator(
            holidays_returning(vec![republic_day()]),
            subscribers,
            mailer,
            LookaheadWindows {
                short_days: 25,
                long_days: 120,
            },
        );

        assert_eq!(
            notifier.run(date(2024, 1, 1)).await,
            NotificationOutcome::NoSubscribers {
                preference: Preference::Upcoming
            }
        );
    }

    #[tokio::test]
    async fn no_qualifying_holidays_skips_subscribers_and_delivery() {
        let wednesday = Holiday::new(date(2024, 1, 31), "Midweek", HolidayType::Gazetted, "Wednesday");
        let restricted = Holiday::new(date(2024, 1, 26), "Restricted", HolidayType::Restricted, "Friday");

        let mut subscribers = MockSubscriberSource::new();
        subscribers.expect_fetch_subscribers().never();
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let notifier = orchestrator(
            holidays_returning(vec![wednesday, restricted]),
            subscribers,
            mailer,
            LookaheadWindows::default(),
        );

        assert_eq!(
            notifier.run(date(2024, 1, 1)).await,
            NotificationOutcome::NoLongWeekend
        );
    }

    #[tokio::test]
    async fn holiday_fetch_failure_becomes_failed_outcome() {
        let mut holidays = MockHolidaySource::new();
        holidays
            .expect_fetch_holidays()
            .returning(|_| {
                let source = reqwest::Client::new().get("http://").build().unwrap_err();
                Err(NotifierError::HolidayFetch(source))
            });
        let mut subscribers = MockSubscriberSource::new();
        subscribers.expect_fetch_subscribers().never();
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let notifier = orchestrator(holidays, subscribers, mailer, LookaheadWindows::default());

        let outcome = notifier.run(date(2024, 1, 1)).await;
        assert!(matches!(
            outcome,
            NotificationOutcome::Failed { ref reason } if reason.starts_with("failed to fetch holidays")
        ));
    }

    #[tokio::test]
    async fn delivery_failure_is_reported_not_propagated() {
        let mut subscribers = MockSubscriberSource::new();
        subscribers
            .expect_fetch_subscribers()
            .returning(|_| Ok(vec!["a@example.com".into()]));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| {
                let source = "smtp refused".parse::<lettre::Address>().unwrap_err();
                Err(NotifierError::InvalidAddress {
                    address: "smtp refused".into(),
                    source,
                })
            });

        let notifier = orchestrator(
            holidays_returning(vec![republic_day()]),
            subscribers,
            mailer,
            LookaheadWindows {
                short_days: 25,
                long_days: 120,
            },
        );

        let err = notifier.try_run(date(2024, 1, 1)).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_address");
    }
}
