/// Conventional username for the main fixture user of a test.
pub static TEST_USERNAME: &str = "pilot-admin";
/// Password assigned to every fixture user.
pub static TEST_PASSWORD: &str = "s3cret-passw0rd";
