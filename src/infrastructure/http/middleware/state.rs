use crate::application::services::HolidayLookupService;

#[derive(Clone)]
pub struct AppState {
    pub lookup_service: HolidayLookupService,
}

impl AppState {
    pub fn new(lookup_service: HolidayLookupService) -> Self {
        Self { lookup_service }
    }
}
