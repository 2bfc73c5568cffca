// ABOUTME: URL helpers - querystring/protocol stripping and full URL parsing
// ABOUTME: urlParse mirrors the legacy node url object shape consumers expect

use serde_json::{json, Value};
use url::Url;

use super::{coerce, insert, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "stripQuerystring", Helper::Inline(strip_querystring));
    insert(registry, "stripProtocol", Helper::Inline(strip_protocol));
    insert(registry, "urlParse", Helper::Inline(url_parse));
}

/// Drop everything from the first `?` on, without normalizing the rest.
fn strip_querystring(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(raw) = args.first() else {
        return Value::Null;
    };
    let text = coerce::render_value(raw);
    let stripped = text.split('?').next().unwrap_or_default().to_string();
    Value::String(stripped)
}

/// Replace the scheme with a protocol-relative prefix:
/// `http://example.com?query=1` becomes `//example.com/?query=1`.
fn strip_protocol(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(raw) = args.first() else {
        return Value::Null;
    };
    let text = coerce::render_value(raw);
    let Ok(parsed) = Url::parse(&text) else {
        return Value::String(text);
    };
    let mut result = String::from("//");
    if let Some(host) = parsed.host_str() {
        result.push_str(host);
    }
    if let Some(port) = parsed.port() {
        result.push_str(&format!(":{port}"));
    }
    result.push_str(parsed.path());
    if let Some(query) = parsed.query() {
        result.push('?');
        result.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        result.push('#');
        result.push_str(fragment);
    }
    Value::String(result)
}

/// Decompose a URL into the legacy node shape so individual parts can feed
/// further helpers, e.g. `{{ object ( urlParse url ) }}`.
fn url_parse(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(raw) = args.first() else {
        return Value::Null;
    };
    let text = coerce::render_value(raw);
    let Ok(parsed) = Url::parse(&text) else {
        return Value::Null;
    };

    let auth = match (parsed.username(), parsed.password()) {
        ("", None) => Value::Null,
        (user, None) => Value::String(user.to_string()),
        (user, Some(password)) => Value::String(format!("{user}:{password}")),
    };
    let host = parsed.host_str().map(|host| match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    });
    let search = parsed.query().map(|q| format!("?{q}"));
    let path = match &search {
        Some(search) => format!("{}{}", parsed.path(), search),
        None => parsed.path().to_string(),
    };

    json!({
        "protocol": format!("{}:", parsed.scheme()),
        "slashes": true,
        "auth": auth,
        "host": host,
        "port": parsed.port().map(|p| p.to_string()),
        "hostname": parsed.host_str(),
        "hash": parsed.fragment().map(|f| format!("#{f}")),
        "search": search,
        "query": parsed.query(),
        "pathname": parsed.path(),
        "path": path,
        "href": parsed.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_querystring() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            strip_querystring(&[json!("http://example.com?query=1")], &scope),
            json!("http://example.com")
        );
    }

    #[test]
    fn test_strip_protocol() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            strip_protocol(&[json!("http://example.com?query=1")], &scope),
            json!("//example.com/?query=1")
        );
    }

    #[test]
    fn test_strip_protocol_keeps_unparseable_input() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            strip_protocol(&[json!("not a url")], &scope),
            json!("not a url")
        );
    }

    #[test]
    fn test_url_parse_shape() {
        let context = json!({});
        let scope = Scope::new(&context);
        let parsed = url_parse(&[json!("http://example.com?query=1")], &scope);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "{\"protocol\":\"http:\",\"slashes\":true,\"auth\":null,\"host\":\"example.com\",\
             \"port\":null,\"hostname\":\"example.com\",\"hash\":null,\"search\":\"?query=1\",\
             \"query\":\"query=1\",\"pathname\":\"/\",\"path\":\"/?query=1\",\
             \"href\":\"http://example.com/?query=1\"}"
        );
    }
}
