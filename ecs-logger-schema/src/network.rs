field_set! {
    /// One side of a network exchange. Used for the `client.*`,
    /// `destination.*` and `source.*` field sets, which share their fields.
    pub struct Endpoint {
        /// Raw address, either an IP, a domain or a unix socket.
        pub address: String,
        /// Bytes sent from this side.
        pub bytes: u64,
        /// Domain name of this side.
        pub domain: String,
        /// IP address, IPv4 or IPv6.
        pub ip: String,
        /// MAC address.
        pub mac: String,
        /// Packets sent from this side.
        pub packets: u64,
        /// Port.
        pub port: u16,
    }

    /// The `http.*` field set.
    pub struct Http {
        /// HTTP request details.
        pub request: HttpRequest,
        /// HTTP response details.
        pub response: HttpResponse,
        /// HTTP version, e.g. `1.1`.
        pub version: String,
    }

    /// The `http.request.*` fields.
    pub struct HttpRequest {
        /// Request body.
        pub body: HttpBody,
        /// Total size in bytes of the request.
        pub bytes: u64,
        /// Unique identifier for each request.
        pub id: String,
        /// HTTP request method, e.g. `POST`.
        pub method: String,
        /// Mime type of the request body.
        pub mime_type: String,
        /// Referrer for this request.
        pub referrer: String,
    }

    /// The `http.response.*` fields.
    pub struct HttpResponse {
        /// Response body.
        pub body: HttpBody,
        /// Total size in bytes of the response.
        pub bytes: u64,
        /// Mime type of the response body.
        pub mime_type: String,
        /// HTTP response status code.
        pub status_code: u16,
    }

    /// The `http.*.body.*` fields.
    pub struct HttpBody {
        /// Size in bytes of the body.
        pub bytes: u64,
        /// The full body content.
        pub content: String,
    }

    /// The `network.*` field set.
    pub struct Network {
        /// Application protocol name, e.g. `http`.
        pub application: String,
        /// Total bytes transferred in both directions.
        pub bytes: u64,
        /// Direction of the traffic, e.g. `inbound`.
        pub direction: String,
        /// L7 protocol, e.g. `http`.
        pub protocol: String,
        /// Transport protocol, e.g. `tcp`.
        pub transport: String,
        /// IP version, `ipv4` or `ipv6`.
        pub r#type: String,
    }

    /// The `url.*` field set.
    pub struct Url {
        /// Domain of the url.
        pub domain: String,
        /// Portion of the url after the `#`.
        pub fragment: String,
        /// Full unparsed URL.
        pub full: String,
        /// Unmodified original url as seen in the event source.
        pub original: String,
        /// Path of the request.
        pub path: String,
        /// Port of the request.
        pub port: u16,
        /// The query field describes the query string of the request.
        pub query: String,
        /// Scheme of the url, without `:`.
        pub scheme: String,
    }

    /// The `user_agent.*` field set.
    pub struct UserAgent {
        /// Name of the device.
        pub device: String,
        /// Name of the user agent.
        pub name: String,
        /// Unparsed user agent string.
        pub original: String,
        /// Version of the user agent.
        pub version: String,
    }
}
