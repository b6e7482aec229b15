use std::cmp::Ordering;

use assetdesk_core::domain::device::{Device, DeviceType, Location};

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Id,
    Code,
    Name,
    Brand,
    Model,
    Type,
    Location,
    Price,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Everything the device list screen shows is derived from this value:
/// the last fetched snapshot is filtered, then sorted, then paginated.
#[derive(Debug, Clone, Default)]
pub struct DeviceListState {
    devices: Vec<Device>,
    search: String,
    type_filter: Option<DeviceType>,
    location_filter: Option<Location>,
    sort: Option<Sort>,
    page: usize,
}

impl DeviceListState {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices,
            page: 1,
            ..Default::default()
        }
    }

    /// Replaces the snapshot after a refetch, keeping search, filters and sort.
    pub fn set_devices(&mut self, devices: Vec<Device>) {
        self.devices = devices;
        self.page = self.page.clamp(1, self.total_pages());
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_type_filter(&mut self, device_type: Option<DeviceType>) {
        self.type_filter = device_type;
        self.page = 1;
    }

    pub fn set_location_filter(&mut self, location: Option<Location>) {
        self.location_filter = location;
        self.page = 1;
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Selecting the active key flips its direction; a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(Sort {
                key: current,
                direction,
            }) if current == key => Sort {
                key,
                direction: match direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                },
            },
            _ => Sort {
                key,
                direction: SortDirection::Asc,
            },
        });
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn filtered(&self) -> Vec<&Device> {
        let needle = self.search.trim().to_lowercase();

        self.devices
            .iter()
            .filter(|device| self.type_filter.is_none_or(|t| device.device_type == Some(t)))
            .filter(|device| {
                self.location_filter
                    .is_none_or(|l| device.location == Some(l))
            })
            .filter(|device| needle.is_empty() || matches_search(device, &needle))
            .collect()
    }

    pub fn sorted(&self) -> Vec<&Device> {
        let mut devices = self.filtered();
        if let Some(sort) = self.sort {
            devices.sort_by(|a, b| {
                let ordering = compare(a, b, sort.key);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        devices
    }

    /// Never less than one, so an empty list still has a first page.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn page_items(&self) -> Vec<&Device> {
        self.sorted()
            .into_iter()
            .skip((self.page.max(1) - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }
}

fn matches_search(device: &Device, needle: &str) -> bool {
    let fields = [
        Some(device.brand.as_str()),
        Some(device.model.as_str()),
        Some(device.code.as_str()),
        device.name.as_deref(),
        device.device_type.as_ref().map(DeviceType::as_str),
        device.location.as_ref().map(Location::as_str),
        device.ip_address.as_deref(),
        device.details.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &Device, b: &Device, key: SortKey) -> Ordering {
    let text = |value: Option<&str>| value.unwrap_or_default().to_lowercase();

    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Price => match (a.price, b.price) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        },
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Code => text(Some(a.code.as_str())).cmp(&text(Some(b.code.as_str()))),
        SortKey::Name => text(a.name.as_deref()).cmp(&text(b.name.as_deref())),
        SortKey::Brand => text(Some(a.brand.as_str())).cmp(&text(Some(b.brand.as_str()))),
        SortKey::Model => text(Some(a.model.as_str())).cmp(&text(Some(b.model.as_str()))),
        SortKey::Type => text(a.device_type.as_ref().map(DeviceType::as_str))
            .cmp(&text(b.device_type.as_ref().map(DeviceType::as_str))),
        SortKey::Location => text(a.location.as_ref().map(Location::as_str))
            .cmp(&text(b.location.as_ref().map(Location::as_str))),
    }
}
