//! Device lifecycle for a single subscriber.
//!
//! The registry is a pure in-memory aggregate component: every operation
//! mutates the owned device list and returns; persisting the updated
//! subscriber is an explicit repository call at the boundary. Concurrent
//! writers to the same subscriber must be serialized externally (single
//! writer per subscriber); a lost race is reported by the storage layer as
//! [`RegistryError::Conflict`], never silently overwritten.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{RegistryError, RegistryResult, ValidationResult};
use crate::models::view::DeviceView;
use crate::models::{
    DEFAULT_DEVICE_NAME, Device, DeviceStatus, MAX_DEVICE_NAME_LENGTH, MIN_DEVICE_NAME_LENGTH,
};
use crate::models::stream::validate_length;

/// Ordered set of devices owned by one subscriber.
///
/// No maximum device count is enforced here; capping the list is caller
/// policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Register a new device in `NotActive` status.
    ///
    /// The name defaults to `"Device"` and must be 3..=32 characters.
    /// Activation is a separate, external authorization step; nothing in this
    /// registry promotes a device on its own.
    pub fn add_device(&mut self, name: Option<&str>) -> ValidationResult<&Device> {
        let name = name.unwrap_or(DEFAULT_DEVICE_NAME);
        validate_length("device.name", name, MIN_DEVICE_NAME_LENGTH, MAX_DEVICE_NAME_LENGTH)?;
        let device = Device::new(name.to_string());
        debug!(device = %device.id, name = %device.name, "device registered");
        self.devices.push(device);
        let idx = self.devices.len() - 1;
        Ok(&self.devices[idx])
    }

    /// Remove the first device matching `id`. Absent ids are a no-op.
    pub fn remove_device(&mut self, id: Uuid) {
        if let Some(pos) = self.devices.iter().position(|d| d.id == id) {
            self.devices.remove(pos);
        }
    }

    pub fn find_device(&self, id: Uuid) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Project every device still awaiting activation.
    pub fn list_not_active(&self) -> Vec<DeviceView> {
        self.devices
            .iter()
            .filter(|d| d.status == DeviceStatus::NotActive)
            .map(Device::to_view)
            .collect()
    }

    /// Move a device through its status machine.
    ///
    /// Allowed: `NotActive -> Active`, `NotActive -> Banned`,
    /// `Active -> Banned`. `Banned` is terminal. Same-status transitions are
    /// idempotent no-ops.
    pub fn transition(&mut self, id: Uuid, to: DeviceStatus) -> RegistryResult<()> {
        let device = self
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(RegistryError::DeviceNotFound { device: id })?;
        let from = device.status;
        if from == to {
            return Ok(());
        }
        let allowed = matches!(
            (from, to),
            (DeviceStatus::NotActive, DeviceStatus::Active)
                | (DeviceStatus::NotActive, DeviceStatus::Banned)
                | (DeviceStatus::Active, DeviceStatus::Banned)
        );
        if !allowed {
            return Err(RegistryError::InvalidTransition {
                device: id,
                from,
                to,
            });
        }
        debug!(device = %id, %from, %to, "device status changed");
        device.status = to;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
