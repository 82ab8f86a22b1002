//! Client address extraction
//!
//! The dashboard usually runs behind a hosting proxy, so the peer address
//! of the TCP connection is rarely the browser's.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Best guess at the originating client address
///
/// Order: first entry of `X-Forwarded-For`, then `X-Real-IP`, then the
/// direct peer address. Unparseable header values are skipped.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
    };

    forwarded.or_else(real_ip).or(direct_ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_for_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));

        let ip = extract_client_ip(&headers, Some("127.0.0.1".parse().unwrap()));
        assert_eq!(ip, Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("garbage"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));

        let ip = extract_client_ip(&headers, None);
        assert_eq!(ip, Some("198.51.100.1".parse().unwrap()));
    }

    #[test]
    fn test_direct_fallback() {
        let direct: IpAddr = "::1".parse().unwrap();
        assert_eq!(extract_client_ip(&HeaderMap::new(), Some(direct)), Some(direct));
        assert_eq!(extract_client_ip(&HeaderMap::new(), None), None);
    }
}
