//! Resource allocation lookup
//!
//! Resources come from a static in-memory table keyed by disaster type;
//! the lookup is deterministic and never mutates the table.

use chrono::{DateTime, Utc};
use shared::{DisasterType, Resource, ResourceResponse, ResourceStatus};

/// Resource allocation service
#[derive(Clone, Default)]
pub struct ResourceService;

impl ResourceService {
    pub fn new() -> Self {
        Self
    }

    /// Resources allocated to `disaster_type` at `location`
    pub fn allocate(
        &self,
        disaster_type: DisasterType,
        location: String,
        now: DateTime<Utc>,
    ) -> ResourceResponse {
        let allocated_resources = resource_table(disaster_type);
        tracing::debug!(
            "Allocated {} resource types for {} in {}",
            allocated_resources.len(),
            disaster_type,
            location
        );

        ResourceResponse {
            disaster_type,
            location,
            allocated_resources,
            timestamp: now,
        }
    }
}

fn resource(
    resource_type: &str,
    count: u32,
    location: &str,
    eta: &str,
    status: ResourceStatus,
) -> Resource {
    Resource {
        resource_type: resource_type.to_string(),
        count,
        location: location.to_string(),
        estimated_arrival_time: eta.to_string(),
        status,
    }
}

/// Static resource table
pub fn resource_table(disaster_type: DisasterType) -> Vec<Resource> {
    use ResourceStatus::*;

    match disaster_type {
        DisasterType::Flood => vec![
            resource("Rescue Boat", 5, "Fire Station 1", "15 minutes", Available),
            resource("Sand Bags", 1000, "City Warehouse", "30 minutes", Available),
            resource("Water Pumps", 10, "Public Works Dept", "20 minutes", Available),
        ],
        DisasterType::Fire => vec![
            resource("Fire Truck", 3, "Fire Station 2", "10 minutes", Available),
            resource("Helicopter", 1, "County Airport", "25 minutes", EnRoute),
        ],
        DisasterType::Earthquake => vec![
            resource("Search & Rescue Team", 2, "Police HQ", "15 minutes", Available),
            resource("Medical Supplies", 50, "City Hospital", "20 minutes", Available),
        ],
        DisasterType::Hurricane => vec![resource(
            "Emergency Shelter Kits",
            200,
            "Red Cross Facility",
            "45 minutes",
            Available,
        )],
        DisasterType::Tsunami => vec![resource(
            "Life Vests",
            150,
            "Coast Guard Station",
            "30 minutes",
            Available,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_disaster_type_has_resources() {
        for disaster_type in DisasterType::ALL {
            assert!(!resource_table(disaster_type).is_empty());
        }
    }

    #[test]
    fn test_fire_helicopter_en_route() {
        let fire = resource_table(DisasterType::Fire);
        let helicopter = fire.iter().find(|r| r.resource_type == "Helicopter").unwrap();
        assert_eq!(helicopter.status, ResourceStatus::EnRoute);
        assert_eq!(helicopter.location, "County Airport");
    }

    #[test]
    fn test_allocate_is_deterministic() {
        let service = ResourceService::new();
        let a = service.allocate(DisasterType::Flood, "River Valley".to_string(), Utc::now());
        let b = service.allocate(DisasterType::Flood, "River Valley".to_string(), Utc::now());
        assert_eq!(a.allocated_resources, b.allocated_resources);
        assert_eq!(a.allocated_resources.len(), 3);
        assert_eq!(a.allocated_resources[1].count, 1000);
    }
}
