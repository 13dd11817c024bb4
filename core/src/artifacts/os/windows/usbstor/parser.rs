/**
 * The `USBSTOR` Registry key tracks USB mass storage devices that have been connected
 * to a system. Device keys group serial number children, each holding the friendly
 * name and hardware IDs of the device
 */
use super::error::UsbStorError;
use crate::artifacts::os::windows::registry::{
    reader::{RegistryHive, RegistryReader},
    values::{DecodedValue, decode_value},
};
use common::windows::UsbStorageDevice;
use log::{error, warn};

/// Path to the USB storage enumeration key in the SYSTEM hive
const USBSTOR_KEY: &str = "SYSTEM\\CurrentControlSet\\Enum\\USBSTOR";

/// Collect USB mass storage devices that were connected to the system
pub fn grab_usbstor(reader: &dyn RegistryReader) -> Result<Vec<UsbStorageDevice>, UsbStorError> {
    let device_result = reader.enumerate_children(RegistryHive::LocalMachine, USBSTOR_KEY);
    let devices = match device_result {
        Ok(results) => results,
        Err(err) => {
            error!("[usbstor] Could not enumerate USBSTOR keys: {err:?}");
            return Err(UsbStorError::RegistryAccess);
        }
    };

    let mut storage_devices = Vec::new();
    for device in devices {
        let device_key = format!("{USBSTOR_KEY}\\{device}");
        let serial_result = reader.enumerate_children(RegistryHive::LocalMachine, &device_key);
        let serials = match serial_result {
            Ok(results) => results,
            Err(err) => {
                error!("[usbstor] Could not enumerate serials under {device_key}: {err:?}");
                continue;
            }
        };

        for serial in serials {
            let serial_key = format!("{device_key}\\{serial}");
            let value_result = reader.enumerate_values(RegistryHive::LocalMachine, &serial_key);
            let values = match value_result {
                Ok(results) => results,
                Err(err) => {
                    error!("[usbstor] Could not enumerate values under {serial_key}: {err:?}");
                    continue;
                }
            };

            // Serial children may carry a `&` suffix after the raw device serial
            let mut storage = UsbStorageDevice {
                serial: serial.split('&').next().unwrap_or_default().to_string(),
                friendly_name: String::new(),
                hardware_ids: Vec::new(),
            };

            for value in values {
                match value.name.as_str() {
                    "FriendlyName" => match decode_value(&value) {
                        Ok(DecodedValue::Text(text)) => storage.friendly_name = text,
                        Ok(_) => {}
                        Err(err) => {
                            warn!("[usbstor] Could not decode FriendlyName: {err:?}");
                        }
                    },
                    "HardwareID" => match decode_value(&value) {
                        Ok(DecodedValue::MultiText(ids)) => storage.hardware_ids = ids,
                        Ok(_) => {}
                        Err(err) => {
                            warn!("[usbstor] Could not decode HardwareID: {err:?}");
                        }
                    },
                    _ => {}
                }
            }
            storage_devices.push(storage);
        }
    }
    Ok(storage_devices)
}

#[cfg(test)]
mod tests {
    use super::{USBSTOR_KEY, grab_usbstor};
    use crate::artifacts::os::windows::registry::{
        reader::{RegistryHive, stub::StubRegistry},
        values::RegValue,
    };

    fn utf16_bytes(text: &str) -> Vec<u8> {
        let mut data: Vec<u8> = text
            .encode_utf16()
            .flat_map(|value| value.to_le_bytes())
            .collect();
        data.extend_from_slice(&[0, 0]);
        data
    }

    #[test]
    fn test_grab_usbstor() {
        let device = "Disk&Ven_SanDisk&Prod_Cruzer&Rev_1.26";
        let serial = "200605999207F8F0283C&0";
        let device_key = format!("{USBSTOR_KEY}\\{device}");
        let serial_key = format!("{device_key}\\{serial}");

        let mut hardware_id = utf16_bytes("USBSTOR\\DiskSanDisk_Cruzer_____1.26");
        hardware_id.append(&mut utf16_bytes("USBSTOR\\Disk"));
        hardware_id.extend_from_slice(&[0, 0]);

        let mut stub = StubRegistry::default();
        stub.insert_key(
            RegistryHive::LocalMachine,
            USBSTOR_KEY,
            vec![device.to_string()],
            Vec::new(),
        );
        stub.insert_key(
            RegistryHive::LocalMachine,
            &device_key,
            vec![serial.to_string()],
            Vec::new(),
        );
        stub.insert_key(
            RegistryHive::LocalMachine,
            &serial_key,
            Vec::new(),
            vec![
                RegValue {
                    name: String::from("FriendlyName"),
                    reg_type: 1,
                    data: utf16_bytes("SanDisk Cruzer USB Device"),
                },
                RegValue {
                    name: String::from("HardwareID"),
                    reg_type: 7,
                    data: hardware_id,
                },
            ],
        );

        let results = grab_usbstor(&stub).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].serial, "200605999207F8F0283C");
        assert_eq!(results[0].friendly_name, "SanDisk Cruzer USB Device");
        assert_eq!(
            results[0].hardware_ids,
            [
                "USBSTOR\\DiskSanDisk_Cruzer_____1.26",
                "USBSTOR\\Disk"
            ]
        );
    }

    #[test]
    fn test_grab_usbstor_missing_key() {
        let stub = StubRegistry::default();
        assert!(grab_usbstor(&stub).is_err());
    }
}
