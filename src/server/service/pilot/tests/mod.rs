use drones_test_utils::prelude::*;
use entity::pilot::Gender;

use crate::server::{model::version::ApiVersion, util::url::ApiUrls};

mod create_pilot;

fn urls() -> ApiUrls {
    ApiUrls::new("http://testserver", ApiVersion::V2)
}
