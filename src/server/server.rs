use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::{CredentialVerifier, UserDirectory};
use crate::infra_gotrue::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    pub auth_service: Arc<dyn AuthService>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let auth_service: Arc<dyn AuthService> = match settings.auth.backend.as_str() {
            "fake" => Arc::new(FakeAuthService::new()),
            "real" => {
                let provider = &settings.provider;
                if provider.base_url.trim().is_empty()
                    || provider.service_role_key.trim().is_empty()
                    || provider.anon_key.trim().is_empty()
                {
                    return Err(anyhow::anyhow!(
                        "provider.base_url, provider.service_role_key and provider.anon_key are required"
                    ));
                }
                // One shared client; the timeout bounds every provider
                // call so a stalled directory cannot hold a login open.
                let http = reqwest::Client::builder()
                    .timeout(Duration::from_secs(provider.request_timeout_secs))
                    .build()?;

                let directory: Arc<dyn UserDirectory> = Arc::new(GoTrueUserDirectory::new(
                    http.clone(),
                    &provider.base_url,
                    &provider.service_role_key,
                ));
                let verifier: Arc<dyn CredentialVerifier> = Arc::new(GoTrueCredentialVerifier::new(
                    http,
                    &provider.base_url,
                    &provider.anon_key,
                ));

                Arc::new(RealAuthService::new(
                    directory,
                    verifier,
                    ScanPolicy {
                        per_page: provider.page_size,
                        max_pages: provider.max_pages,
                    },
                ))
            }
            other => return Err(anyhow::anyhow!("Unknown auth backend: {}", other)),
        };

        info!(backend = %settings.auth.backend, "server ready");

        Ok(Self { auth_service })
    }
}
