use crate::api_client::CareerApiClient;
use crate::operations::guard::InFlight;

/// Shared client state handed to every operation.
///
/// Holds no rendered data; each operation owns one in-flight guard so a
/// repeated trigger cannot overlap its own pending request.
pub struct AppState {
    pub client: CareerApiClient,
    pub submit_guard: InFlight,
    pub list_guard: InFlight,
    pub recommend_guard: InFlight,
    pub basic_guard: InFlight,
    pub streams_guard: InFlight,
    pub level_streams_guard: InFlight,
    pub exams_guard: InFlight,
    pub show_guard: InFlight,
    pub update_guard: InFlight,
    pub health_guard: InFlight,
}

impl AppState {
    pub fn new(client: CareerApiClient) -> Self {
        Self {
            client,
            submit_guard: InFlight::default(),
            list_guard: InFlight::default(),
            recommend_guard: InFlight::default(),
            basic_guard: InFlight::default(),
            streams_guard: InFlight::default(),
            level_streams_guard: InFlight::default(),
            exams_guard: InFlight::default(),
            show_guard: InFlight::default(),
            update_guard: InFlight::default(),
            health_guard: InFlight::default(),
        }
    }
}
