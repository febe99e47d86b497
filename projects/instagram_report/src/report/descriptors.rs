pub use crate::utils::date_window::DateEncoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub encoding: DateEncoding,
}

/// Stats service, windowed by `start`/`end` as `YYYYMMDD`.
pub static STATS_ENDPOINTS: [EndpointDescriptor; 3] = [
    EndpointDescriptor {
        name: "instagram_posts",
        path: "/stats/instagram/posts",
        encoding: DateEncoding::Compact,
    },
    EndpointDescriptor {
        name: "instagram_reels",
        path: "/stats/instagram/reels",
        encoding: DateEncoding::Compact,
    },
    EndpointDescriptor {
        name: "instagram_stories",
        path: "/stats/instagram/stories",
        encoding: DateEncoding::Compact,
    },
];

/// Analytics v2, windowed by `from`/`to` as ISO 8601.
pub static ANALYTICS_ENDPOINTS: [EndpointDescriptor; 4] = [
    EndpointDescriptor {
        name: "analytics_posts",
        path: "/v2/analytics/posts/instagram",
        encoding: DateEncoding::Iso,
    },
    EndpointDescriptor {
        name: "analytics_reels",
        path: "/v2/analytics/reels/instagram",
        encoding: DateEncoding::Iso,
    },
    EndpointDescriptor {
        name: "analytics_stories",
        path: "/v2/analytics/stories/instagram",
        encoding: DateEncoding::Iso,
    },
    EndpointDescriptor {
        name: "analytics_posts_hashtags",
        path: "/v2/analytics/posts/instagram/hashtags",
        encoding: DateEncoding::Iso,
    },
];

/// Stats first, then analytics, each in declaration order.
pub fn all_endpoints() -> impl Iterator<Item = &'static EndpointDescriptor> {
    STATS_ENDPOINTS.iter().chain(ANALYTICS_ENDPOINTS.iter())
}
