use std::sync::Arc;

use artboard_core::ports::{AuthProvider, ReportSink};
use artboard_core::services::{AuthService, ReportService, SessionResolver};
use artboard_core::{DomainError, RuleTable};
use artboard_shared::constants::DEFAULT_APP_NAME;
use artboard_shared::{AppConfig, CookieSettings};

/// Application state shared across handlers. Cloned per request; everything
/// inside is immutable.
#[derive(Clone)]
pub struct AppState {
    pub resolver: SessionResolver,
    pub auth: AuthService,
    pub reports: ReportService,
    pub rules: Arc<RuleTable>,
    pub cookies: Arc<CookieSettings>,
    /// Reported by the health endpoint.
    pub app_name: Arc<str>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        report_sink: Arc<dyn ReportSink>,
        config: &AppConfig,
    ) -> Result<Self, DomainError> {
        let rules = RuleTable::from_settings(&config.routes.rules)?;
        Ok(Self::with_rules(provider, report_sink, config.cookie.clone(), &config.site.url, rules)
            .with_app_name(&config.app.name))
    }

    pub fn with_rules(
        provider: Arc<dyn AuthProvider>,
        report_sink: Arc<dyn ReportSink>,
        cookies: CookieSettings,
        site_url: &str,
        rules: RuleTable,
    ) -> Self {
        Self {
            resolver: SessionResolver::new(provider.clone(), cookies.clone()),
            auth: AuthService::new(provider, cookies.clone(), site_url),
            reports: ReportService::new(report_sink),
            rules: Arc::new(rules),
            cookies: Arc::new(cookies),
            app_name: Arc::from(DEFAULT_APP_NAME),
        }
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = Arc::from(name);
        self
    }
}
