//! Catalogue of what a host offers when creating a server.

use serde::{Deserialize, Serialize};

use super::nullable;

/// A version of an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostImageVersion {
    /// Version ID, usable as `HostImageID` when creating a server.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Human-readable version.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Whether the version rejects root passwords.
    #[serde(deserialize_with = "nullable")]
    pub password_unsupported: bool,
}

/// Optional features a host supports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostOptions {
    /// Servers can be rebuilt.
    #[serde(deserialize_with = "nullable")]
    pub rebuild: bool,
    /// Servers can be resized.
    #[serde(deserialize_with = "nullable")]
    pub resize: bool,
    /// Backups are available.
    #[serde(deserialize_with = "nullable")]
    pub backups: bool,
    /// First-boot scripts are supported.
    #[serde(deserialize_with = "nullable")]
    pub user_script: bool,
}

/// An installable image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostImage {
    /// Image ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    /// Image name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Image family.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    /// Smallest disk the image fits on, in GB.
    #[serde(deserialize_with = "nullable")]
    pub min_disk_size: u32,
    /// Regions the image cannot be installed in.
    #[serde(deserialize_with = "nullable")]
    pub unavailable_regions: Vec<String>,
    /// Version used when none is chosen.
    #[serde(rename = "version", deserialize_with = "nullable")]
    pub default_version: HostImageVersion,
    /// All versions.
    #[serde(deserialize_with = "nullable")]
    pub versions: Vec<HostImageVersion>,
    /// Licence surcharge per month.
    #[serde(deserialize_with = "nullable")]
    pub extra_cost_per_month: i64,
    /// Whether this is a Windows image.
    #[serde(deserialize_with = "nullable")]
    pub windows: bool,
}

/// A datacentre within a region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSubRegion {
    /// Sub-region ID, usable as `regionID` when creating a server.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Human-readable name.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Slug.
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    /// Sizes not offered here.
    #[serde(deserialize_with = "nullable")]
    pub unavailable_sizes: Vec<String>,
}

/// A region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostRegion {
    /// Region ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    /// Region name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// ISO country code.
    #[serde(deserialize_with = "nullable")]
    pub iso: String,
    /// Sub-region used when none is chosen.
    #[serde(rename = "subregion", deserialize_with = "nullable")]
    pub default_subregion: HostSubRegion,
    /// All sub-regions.
    #[serde(deserialize_with = "nullable")]
    pub subregions: Vec<HostSubRegion>,
}

/// A disk included with a size.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostDisk {
    /// Disk technology.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    /// Number of disks.
    #[serde(deserialize_with = "nullable")]
    pub count: u32,
    /// Size per disk.
    #[serde(deserialize_with = "nullable")]
    pub size: String,
    /// Unit of `size`.
    #[serde(deserialize_with = "nullable")]
    pub unit: String,
}

/// A hardware plan family.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostPlanType {
    /// Plan type key, matched by [`HostSize::plan_type`].
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    /// Description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Display name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// A server size.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSize {
    /// Size ID, usable as `sizeID` when creating a server.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Slug.
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    /// Monthly bandwidth in GB.
    #[serde(rename = "bandwidthGB", deserialize_with = "nullable")]
    pub bandwidth_gb: u32,
    /// vCPU count.
    #[serde(deserialize_with = "nullable")]
    pub cpu_count: u32,
    /// Disk size in GB.
    #[serde(rename = "diskGB", deserialize_with = "nullable")]
    pub disk_gb: u32,
    /// Disk layout.
    #[serde(deserialize_with = "nullable")]
    pub disks: Vec<HostDisk>,
    /// Memory in MB.
    #[serde(rename = "memoryMB", deserialize_with = "nullable")]
    pub memory_mb: u32,
    /// Hourly cost.
    #[serde(rename = "costPerHr", deserialize_with = "nullable")]
    pub cost_per_hour: i64,
    /// Monthly cost.
    #[serde(deserialize_with = "nullable")]
    pub cost_per_month: f64,
    /// Hardware plan (standard, CPU focused, ...).
    #[serde(deserialize_with = "nullable")]
    pub plan_type: String,
}

/// Everything that can be chosen when creating a server on one host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerCreateOptions {
    /// Host the options belong to.
    #[serde(rename = "hostID", deserialize_with = "nullable")]
    pub host_id: u32,
    /// Installable images.
    #[serde(rename = "image", deserialize_with = "nullable")]
    pub images: Vec<HostImage>,
    /// Regions.
    #[serde(rename = "region", deserialize_with = "nullable")]
    pub regions: Vec<HostRegion>,
    /// Sizes.
    #[serde(rename = "size", deserialize_with = "nullable")]
    pub sizes: Vec<HostSize>,
    /// Whether the host currently accepts new servers.
    #[serde(deserialize_with = "nullable")]
    pub available: bool,
    /// Cost of bandwidth beyond the allowance.
    #[serde(rename = "bandwidthCost", deserialize_with = "nullable")]
    pub bandwidth_cost: i64,
    /// Hardware plan families.
    #[serde(rename = "planTypes", deserialize_with = "nullable")]
    pub plan_types: Vec<HostPlanType>,
    /// Features the host supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HostOptions>,
}

impl ServerCreateOptions {
    /// Look up a size by ID.
    #[must_use]
    pub fn size(&self, id: &str) -> Option<&HostSize> {
        self.sizes.iter().find(|size| size.id == id)
    }

    /// Sizes belonging to a plan family.
    pub fn sizes_for_plan<'a>(
        &'a self,
        plan_type: &'a str,
    ) -> impl Iterator<Item = &'a HostSize> + 'a {
        self.sizes.iter().filter(move |size| size.plan_type == plan_type)
    }

    /// Look up a region by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&HostRegion> {
        self.regions.iter().find(|region| region.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ServerCreateOptions {
        serde_json::from_value(json!({
            "hostID": 4,
            "available": true,
            "bandwidthCost": 1,
            "image": [{
                "id": 10,
                "name": "Ubuntu",
                "type": "linux",
                "minDiskSize": 10,
                "version": {"id": "10001", "description": "22.04"},
                "versions": [{"id": "10001", "description": "22.04"}],
                "windows": false
            }],
            "region": [{
                "id": 3,
                "name": "Amsterdam",
                "iso": "nl",
                "subregion": {"id": "ams3", "description": "Amsterdam 3", "slug": "ams3"},
                "subregions": [{"id": "ams3", "slug": "ams3", "unavailableSizes": ["s-big"]}]
            }],
            "size": [
                {
                    "id": "s-1",
                    "slug": "nibble-1024",
                    "cpuCount": 1,
                    "memoryMB": 1024,
                    "diskGB": 25,
                    "costPerMonth": 5.5,
                    "planType": "standard",
                    "disks": [{"type": "ssd", "count": 1, "size": "25", "unit": "GB"}]
                },
                {
                    "id": "s-2",
                    "slug": "cpu-2048",
                    "cpuCount": 2,
                    "memoryMB": 2048,
                    "planType": "cpu"
                }
            ],
            "planTypes": [{"type": "standard", "name": "Standard", "description": "Shared CPU"}]
        }))
        .unwrap()
    }

    #[test]
    fn decodes_catalogue() {
        let options = sample();
        assert_eq!(options.host_id, 4);
        assert_eq!(options.images[0].kind, "linux");
        assert_eq!(options.images[0].default_version.id, "10001");
        assert_eq!(options.regions[0].default_subregion.slug, "ams3");
        assert_eq!(
            options.regions[0].subregions[0].unavailable_sizes,
            vec!["s-big".to_string()]
        );
        assert_eq!(options.sizes[0].disks[0].kind, "ssd");
        assert_eq!(options.plan_types[0].kind, "standard");
        assert!(options.options.is_none());
    }

    #[test]
    fn lookup_helpers() {
        let options = sample();
        assert_eq!(options.size("s-2").map(|s| s.memory_mb), Some(2048));
        assert!(options.size("nope").is_none());
        assert_eq!(options.sizes_for_plan("standard").count(), 1);
        assert_eq!(options.region("Amsterdam").map(|r| r.id), Some(3));
    }
}
