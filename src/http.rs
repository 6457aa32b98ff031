//! HTTP client with custom DNS resolver for cross-platform compatibility
//!
//! Uses hickory-dns with Cloudflare DNS (1.1.1.1) to avoid relying on
//! system DNS configuration, which may not exist on some platforms (e.g., Termux/Android).

use crate::config::NetworkConfig;
use crate::error::Error;
use hickory_resolver::{
    config::ResolverConfig,
    name_server::TokioConnectionProvider,
    Resolver,
};
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

type TokioResolver = Resolver<TokioConnectionProvider>;

/// DNS resolver backed by Cloudflare, independent of /etc/resolv.conf
struct HickoryDnsResolver {
    resolver: Arc<TokioResolver>,
}

impl HickoryDnsResolver {
    fn new() -> Self {
        let resolver = Resolver::builder_with_config(
            ResolverConfig::cloudflare(),
            TokioConnectionProvider::default(),
        )
        .build();
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

impl Resolve for HickoryDnsResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.resolver.clone();
        Box::pin(async move {
            let lookup = resolver
                .lookup_ip(name.as_str())
                .await
                .map_err(io::Error::other)?;

            let addrs: Vec<SocketAddr> = lookup
                .iter()
                .map(|ip| SocketAddr::new(ip, 0))
                .collect();

            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

/// Client builder with the configured resolver and timeout
pub fn create_client_builder(network: &NetworkConfig) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder()
        .user_agent(concat!("mdspark/", env!("CARGO_PKG_VERSION")));

    let builder = if network.timeout > 0 {
        builder.timeout(Duration::from_secs(network.timeout))
    } else {
        builder
    };

    if network.system_dns {
        builder
    } else {
        builder.dns_resolver(Arc::new(HickoryDnsResolver::new()))
    }
}

/// Build the HTTP client used for posting
pub fn create_client(network: &NetworkConfig) -> Result<reqwest::Client, Error> {
    create_client_builder(network)
        .build()
        .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))
}
