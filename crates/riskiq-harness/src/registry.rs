//! Name-to-method registry for golden-file driven calls.
//!
//! Golden records name client methods as `group.method` (for example
//! `pdns.name`). Every name maps to an adapter that pulls its arguments out of the
//! recorded `args`/`kwargs` and calls the typed wrapper.

use riskiq_client::api::{LandingPageSubmission, PdnsQuery, WhoisQuery};
use riskiq_client::RiskIqClient;
use riskiq_core::{DateRange, Result, RiskIqError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Adapter invoking one client method with recorded arguments
pub type MethodFn = fn(&RiskIqClient, &mut Invocation<'_>) -> Result<Value>;

/// Recorded arguments for a single call.
///
/// Required arguments are taken positionally first, then by keyword. Optional
/// arguments are keyword-only. [`finish`](Self::finish) rejects anything left over.
pub struct Invocation<'a> {
    method: &'a str,
    args: &'a [Value],
    kwargs: &'a Map<String, Value>,
    next_arg: usize,
    consumed: BTreeSet<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Wrap recorded arguments for `method`
    #[must_use]
    pub const fn new(method: &'a str, args: &'a [Value], kwargs: &'a Map<String, Value>) -> Self {
        Self {
            method,
            args,
            kwargs,
            next_arg: 0,
            consumed: BTreeSet::new(),
        }
    }

    fn invalid(&self, message: impl std::fmt::Display) -> RiskIqError {
        RiskIqError::InvalidParameter(format!("{}: {message}", self.method))
    }

    fn keyword(&mut self, name: &str) -> Option<&'a Value> {
        let (key, value) = self.kwargs.get_key_value(name)?;
        self.consumed.insert(key.as_str());
        Some(value)
    }

    /// Next required argument
    pub fn arg(&mut self, name: &str) -> Result<&'a Value> {
        if let Some(value) = self.args.get(self.next_arg) {
            self.next_arg += 1;
            return Ok(value);
        }
        self.keyword(name)
            .ok_or_else(|| self.invalid(format!("missing required argument `{name}`")))
    }

    /// Next required string argument
    pub fn str_arg(&mut self, name: &str) -> Result<&'a str> {
        let value = self.arg(name)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(format!("`{name}` must be a string, got {value}")))
    }

    /// Next required argument holding a list of strings
    pub fn str_list_arg(&mut self, name: &str) -> Result<Vec<&'a str>> {
        let value = self.arg(name)?;
        value
            .as_array()
            .and_then(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>())
            .ok_or_else(|| self.invalid(format!("`{name}` must be a list of strings, got {value}")))
    }

    /// Next required argument deserialized into `T`
    pub fn typed_arg<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let value = self.arg(name)?;
        serde_json::from_value(value.clone()).map_err(|e| self.invalid(format!("`{name}`: {e}")))
    }

    fn optional(&mut self, name: &str) -> Option<&'a Value> {
        self.keyword(name).filter(|value| !value.is_null())
    }

    /// Optional string keyword
    pub fn opt_str(&mut self, name: &str) -> Result<Option<&'a str>> {
        match self.optional(name) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.invalid(format!("`{name}` must be a string, got {value}"))),
        }
    }

    /// Optional unsigned integer keyword
    pub fn opt_u32(&mut self, name: &str) -> Result<Option<u32>> {
        match self.optional(name) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(format!("`{name}` must be an unsigned integer, got {value}"))),
        }
    }

    /// Optional boolean keyword
    pub fn opt_bool(&mut self, name: &str) -> Result<Option<bool>> {
        match self.optional(name) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.invalid(format!("`{name}` must be a boolean, got {value}"))),
        }
    }

    /// Optional timeout keyword in seconds
    pub fn opt_timeout(&mut self) -> Result<Option<Duration>> {
        match self.optional("timeout") {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .filter(|secs| *secs > 0.0)
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(format!("`timeout` must be positive seconds, got {value}"))),
        }
    }

    /// Optional `start`/`end` keywords (`YYYY-MM-DD`), both or neither
    pub fn date_range(&mut self) -> Result<Option<DateRange>> {
        match (self.opt_str("start")?, self.opt_str("end")?) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => DateRange::parse(start, end).map(Some),
            _ => Err(self.invalid("`start` and `end` must be given together")),
        }
    }

    /// Reject unconsumed positional or keyword arguments
    pub fn finish(&self) -> Result<()> {
        if self.next_arg < self.args.len() {
            return Err(self.invalid(format!(
                "takes {} positional argument(s) but {} were given",
                self.next_arg,
                self.args.len()
            )));
        }

        let unknown: Vec<&str> = self
            .kwargs
            .keys()
            .map(String::as_str)
            .filter(|key| !self.consumed.contains(key))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(self.invalid(format!("unexpected keyword argument(s): {}", unknown.join(", "))))
        }
    }
}

/// Explicit mapping from method name to adapter, built once per harness
#[derive(Clone)]
pub struct MethodRegistry {
    methods: BTreeMap<&'static str, MethodFn>,
}

impl MethodRegistry {
    /// Registry with no methods
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            methods: BTreeMap::new(),
        }
    }

    /// Registry covering every public client wrapper
    #[must_use]
    pub fn client_methods() -> Self {
        let mut registry = Self::empty();
        registry.register("pdns.name", pdns_name);
        registry.register("pdns.ip", pdns_ip);
        registry.register("pdns.data", pdns_data);
        registry.register("blacklist.lookup", blacklist_lookup);
        registry.register("blacklist.lookup_bulk", blacklist_lookup_bulk);
        registry.register("blacklist.incident", blacklist_incident);
        registry.register("blacklist.incident_list", blacklist_incident_list);
        registry.register("blacklist.list", blacklist_list);
        registry.register("blacklist.malware", blacklist_malware);
        registry.register("blacklist.exploit_binary", blacklist_exploit_binary);
        registry.register("landing_page.lookup", landing_page_lookup);
        registry.register("landing_page.crawled", landing_page_crawled);
        registry.register("landing_page.flagged", landing_page_flagged);
        registry.register("landing_page.malicious", landing_page_malicious);
        registry.register("landing_page.submit", landing_page_submit);
        registry.register("landing_page.submit_bulk", landing_page_submit_bulk);
        registry.register("whois.query", whois_query);
        registry.register("zlist.urls", zlist_urls);
        registry.register("affiliate.campaign_summary", affiliate_campaign_summary);
        registry.register("affiliate.incident_list", affiliate_incident_list);
        registry
    }

    /// Add or replace a method
    pub fn register(&mut self, name: &'static str, method: MethodFn) {
        self.methods.insert(name, method);
    }

    /// Look up a method by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MethodFn> {
        self.methods.get(name).copied()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }

    /// Look up a method, failing with a configuration error for unknown names
    pub fn require(&self, name: &str) -> Result<MethodFn> {
        self.get(name).ok_or_else(|| {
            RiskIqError::Configuration(format!("unknown client method `{name}` in golden file"))
        })
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::client_methods()
    }
}

fn pdns_query(call: &mut Invocation<'_>) -> Result<PdnsQuery> {
    Ok(PdnsQuery {
        rrtype: call.opt_str("rrtype")?.map(String::from),
        max_results: call.opt_u32("max_results")?,
        timeout: call.opt_timeout()?,
    })
}

fn pdns_name(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let name = call.str_arg("name")?;
    let query = pdns_query(call)?;
    call.finish()?;
    client.pdns().name(name, &query)
}

fn pdns_ip(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let ip = call.str_arg("ip")?;
    let query = pdns_query(call)?;
    call.finish()?;
    client.pdns().ip(ip, &query)
}

fn pdns_data(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let hostname = call.str_arg("hostname")?;
    let query = pdns_query(call)?;
    call.finish()?;
    client.pdns().data(hostname, &query)
}

fn blacklist_lookup(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let url = call.str_arg("url")?;
    call.finish()?;
    client.blacklist().lookup(url)
}

fn blacklist_lookup_bulk(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let urls = call.str_list_arg("urls")?;
    call.finish()?;
    client.blacklist().lookup_bulk(&urls).map(Value::Array)
}

fn blacklist_incident(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let url = call.str_arg("url")?;
    let start_index = call.opt_u32("start_index")?;
    let max_results = call.opt_u32("max_results")?;
    call.finish()?;
    client.blacklist().incident(url, start_index, max_results)
}

fn blacklist_incident_list(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    let all_workspace_crawls = call.opt_bool("all_workspace_crawls")?;
    call.finish()?;
    client
        .blacklist()
        .incident_list(range.as_ref(), all_workspace_crawls)
}

fn blacklist_list(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let filter = call.opt_str("filter")?;
    let range = call.date_range()?;
    call.finish()?;
    client.blacklist().list(filter, range.as_ref())
}

fn blacklist_malware(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let filter = call.opt_str("filter")?;
    let confidence = call.opt_str("confidence")?;
    let range = call.date_range()?;
    call.finish()?;
    client.blacklist().malware(filter, confidence, range.as_ref())
}

fn blacklist_exploit_binary(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    call.finish()?;
    client.blacklist().exploit_binary(range.as_ref())
}

fn landing_page_lookup(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let md5 = call.str_arg("md5")?;
    call.finish()?;
    client.landing_page().lookup(md5)
}

fn landing_page_crawled(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    let whois = call.opt_bool("whois")?;
    call.finish()?;
    client.landing_page().crawled(range.as_ref(), whois)
}

fn landing_page_flagged(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    let whois = call.opt_bool("whois")?;
    call.finish()?;
    client.landing_page().flagged(range.as_ref(), whois)
}

fn landing_page_malicious(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    let whois = call.opt_bool("whois")?;
    call.finish()?;
    client.landing_page().malicious(range.as_ref(), whois)
}

fn landing_page_submit(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let submission = LandingPageSubmission {
        url: call.str_arg("url")?.to_string(),
        keyword: call.opt_str("keyword")?.map(String::from),
        md5_hash: call.opt_str("md5_hash")?.map(String::from),
        project_name: call.opt_str("project_name")?.map(String::from),
        pingback_url: call.opt_str("pingback_url")?.map(String::from),
    };
    call.finish()?;
    client.landing_page().submit(&submission)
}

fn landing_page_submit_bulk(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let entries: Vec<LandingPageSubmission> = call.typed_arg("entries")?;
    call.finish()?;
    client.landing_page().submit_bulk(&entries)
}

fn whois_query(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let query = WhoisQuery {
        domain: call.opt_str("domain")?.map(String::from),
        email: call.opt_str("email")?.map(String::from),
        name_server: call.opt_str("name_server")?.map(String::from),
        max_results: call.opt_u32("max_results")?,
    };
    call.finish()?;
    client.whois().query(&query)
}

fn zlist_urls(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    call.finish()?;
    client.zlist().urls(range.as_ref())
}

fn affiliate_campaign_summary(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let range = call.date_range()?;
    call.finish()?;
    client.affiliate().campaign_summary(range.as_ref())
}

fn affiliate_incident_list(client: &RiskIqClient, call: &mut Invocation<'_>) -> Result<Value> {
    let known_profile = call.opt_bool("known_profile")?;
    let max_results = call.opt_u32("max_results")?;
    let range = call.date_range()?;
    call.finish()?;
    client
        .affiliate()
        .incident_list(known_profile, max_results, range.as_ref())
}
