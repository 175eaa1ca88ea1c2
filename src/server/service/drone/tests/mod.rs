use drones_test_utils::prelude::*;

use crate::server::{model::version::ApiVersion, util::url::ApiUrls};

mod update_drone;

fn urls() -> ApiUrls {
    ApiUrls::new("http://testserver", ApiVersion::V1)
}
