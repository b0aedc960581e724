pub(crate) mod date;
pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use date::{parse_date, record_key};
pub(crate) use logging::setup_logging;
pub(crate) use timezone::Timezone;
