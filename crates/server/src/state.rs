use service::PermitService;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub permits: PermitService,
}

impl AppState {
    pub fn new(permits: PermitService) -> Self {
        Self { permits }
    }
}
