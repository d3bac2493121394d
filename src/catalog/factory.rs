use crate::catalog::domain::service::Library;
use crate::core::domain::{CapacitySwitch, Configuration};
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_library(config: &Configuration, capacity: &CapacitySwitch, via: GatewayPublisherVia,
                      address: &str, opening_hours: u32, closing_time: u32) -> Library {
    let publisher = create_publisher(via);
    Library::build(config, capacity.clone(), publisher, address, opening_hours, closing_time)
}
