use super::{error::RegistryError, values::RegValue};

/// Registry hives supported for live collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryHive {
    CurrentUser,
    LocalMachine,
}

/// Capability interface for Registry access.
/// Collectors depend only on this trait so the same walk and decode logic runs against
/// an in-memory Registry in tests
pub trait RegistryReader {
    /// Verify a key exists at the provided path
    fn open_key(&self, hive: RegistryHive, path: &str) -> Result<(), RegistryError>;
    /// List child key names directly under the provided path
    fn enumerate_children(
        &self,
        hive: RegistryHive,
        path: &str,
    ) -> Result<Vec<String>, RegistryError>;
    /// List all values directly under the provided path
    fn enumerate_values(
        &self,
        hive: RegistryHive,
        path: &str,
    ) -> Result<Vec<RegValue>, RegistryError>;
    /// Read a single named value under the provided path
    fn read_value(
        &self,
        hive: RegistryHive,
        path: &str,
        name: &str,
    ) -> Result<RegValue, RegistryError>;
}

#[cfg(target_os = "windows")]
pub use live::LiveRegistry;

#[cfg(target_os = "windows")]
mod live {
    use super::{RegistryHive, RegistryReader};
    use crate::artifacts::os::windows::registry::{error::RegistryError, values::RegValue};
    use log::error;
    use std::ptr::{null, null_mut};
    use windows_sys::Win32::Foundation::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
    use windows_sys::Win32::System::Registry::{
        HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, RegCloseKey, RegEnumKeyExW,
        RegEnumValueW, RegOpenKeyExW, RegQueryValueExW,
    };

    /// Live Registry access for the running system
    #[derive(Default)]
    pub struct LiveRegistry {}

    /// Open key handle that closes itself when dropped
    struct KeyHandle(HKEY);

    impl Drop for KeyHandle {
        fn drop(&mut self) {
            unsafe {
                RegCloseKey(self.0);
            }
        }
    }

    /// Max characters in a Registry key name
    const MAX_KEY_NAME: usize = 256;
    /// Max characters in a Registry value name
    const MAX_VALUE_NAME: usize = 16384;

    /// Encode a Rust string as a NUL terminated wide string
    fn to_wide(value: &str) -> Vec<u16> {
        value.encode_utf16().chain(std::iter::once(0)).collect()
    }

    impl LiveRegistry {
        fn root_key(hive: RegistryHive) -> HKEY {
            match hive {
                RegistryHive::CurrentUser => HKEY_CURRENT_USER,
                RegistryHive::LocalMachine => HKEY_LOCAL_MACHINE,
            }
        }

        fn open(hive: RegistryHive, path: &str) -> Result<KeyHandle, RegistryError> {
            let wide_path = to_wide(path);
            let mut hkey: HKEY = null_mut();
            let status = unsafe {
                RegOpenKeyExW(
                    LiveRegistry::root_key(hive),
                    wide_path.as_ptr(),
                    0,
                    KEY_READ,
                    &mut hkey,
                )
            };
            if status != ERROR_SUCCESS {
                error!("[registry] Could not open key {path}: status {status}");
                return Err(RegistryError::OpenKey);
            }
            Ok(KeyHandle(hkey))
        }

        /// Query the data and type tag of a single value on an open key
        fn query_value(key: &KeyHandle, name: &str) -> Result<RegValue, RegistryError> {
            let wide_name = to_wide(name);
            let mut reg_type = 0;
            let mut data_size = 0;

            // First query determines the required buffer size
            let status = unsafe {
                RegQueryValueExW(
                    key.0,
                    wide_name.as_ptr(),
                    null(),
                    &mut reg_type,
                    null_mut(),
                    &mut data_size,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(RegistryError::ReadValue);
            }

            let mut data = vec![0u8; data_size as usize];
            let status = unsafe {
                RegQueryValueExW(
                    key.0,
                    wide_name.as_ptr(),
                    null(),
                    &mut reg_type,
                    data.as_mut_ptr(),
                    &mut data_size,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(RegistryError::ReadValue);
            }
            data.truncate(data_size as usize);

            Ok(RegValue {
                name: name.to_string(),
                reg_type,
                data,
            })
        }
    }

    impl RegistryReader for LiveRegistry {
        fn open_key(&self, hive: RegistryHive, path: &str) -> Result<(), RegistryError> {
            let _key = LiveRegistry::open(hive, path)?;
            Ok(())
        }

        fn enumerate_children(
            &self,
            hive: RegistryHive,
            path: &str,
        ) -> Result<Vec<String>, RegistryError> {
            let key = LiveRegistry::open(hive, path)?;

            let mut children = Vec::new();
            let mut index = 0;
            loop {
                let mut name_buffer = vec![0u16; MAX_KEY_NAME];
                let mut name_size = name_buffer.len() as u32;
                let status = unsafe {
                    RegEnumKeyExW(
                        key.0,
                        index,
                        name_buffer.as_mut_ptr(),
                        &mut name_size,
                        null(),
                        null_mut(),
                        null_mut(),
                        null_mut(),
                    )
                };
                if status == ERROR_NO_MORE_ITEMS {
                    break;
                }
                if status != ERROR_SUCCESS {
                    error!("[registry] Could not enumerate children of {path}: status {status}");
                    return Err(RegistryError::Enumerate);
                }
                children.push(String::from_utf16_lossy(&name_buffer[..name_size as usize]));
                index += 1;
            }
            Ok(children)
        }

        fn enumerate_values(
            &self,
            hive: RegistryHive,
            path: &str,
        ) -> Result<Vec<RegValue>, RegistryError> {
            let key = LiveRegistry::open(hive, path)?;

            let mut values = Vec::new();
            let mut index = 0;
            loop {
                let mut name_buffer = vec![0u16; MAX_VALUE_NAME];
                let mut name_size = name_buffer.len() as u32;
                let status = unsafe {
                    RegEnumValueW(
                        key.0,
                        index,
                        name_buffer.as_mut_ptr(),
                        &mut name_size,
                        null(),
                        null_mut(),
                        null_mut(),
                        null_mut(),
                    )
                };
                if status == ERROR_NO_MORE_ITEMS {
                    break;
                }
                if status != ERROR_SUCCESS {
                    error!("[registry] Could not enumerate values of {path}: status {status}");
                    return Err(RegistryError::Enumerate);
                }

                let name = String::from_utf16_lossy(&name_buffer[..name_size as usize]);
                match LiveRegistry::query_value(&key, &name) {
                    Ok(value) => values.push(value),
                    Err(err) => {
                        error!("[registry] Could not read value {name} under {path}: {err:?}");
                    }
                }
                index += 1;
            }
            Ok(values)
        }

        fn read_value(
            &self,
            hive: RegistryHive,
            path: &str,
            name: &str,
        ) -> Result<RegValue, RegistryError> {
            let key = LiveRegistry::open(hive, path)?;
            LiveRegistry::query_value(&key, name)
        }
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::{RegistryHive, RegistryReader};
    use crate::artifacts::os::windows::registry::{error::RegistryError, values::RegValue};
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct StubKey {
        pub(crate) children: Vec<String>,
        pub(crate) values: Vec<RegValue>,
    }

    /// In-memory Registry for exercising collectors against synthetic data
    #[derive(Default)]
    pub(crate) struct StubRegistry {
        pub(crate) keys: HashMap<(RegistryHive, String), StubKey>,
    }

    impl StubRegistry {
        pub(crate) fn insert_key(
            &mut self,
            hive: RegistryHive,
            path: &str,
            children: Vec<String>,
            values: Vec<RegValue>,
        ) {
            self.keys
                .insert((hive, path.to_string()), StubKey { children, values });
        }
    }

    impl RegistryReader for StubRegistry {
        fn open_key(&self, hive: RegistryHive, path: &str) -> Result<(), RegistryError> {
            if self.keys.contains_key(&(hive, path.to_string())) {
                return Ok(());
            }
            Err(RegistryError::NotFound)
        }

        fn enumerate_children(
            &self,
            hive: RegistryHive,
            path: &str,
        ) -> Result<Vec<String>, RegistryError> {
            match self.keys.get(&(hive, path.to_string())) {
                Some(key) => Ok(key.children.clone()),
                None => Err(RegistryError::NotFound),
            }
        }

        fn enumerate_values(
            &self,
            hive: RegistryHive,
            path: &str,
        ) -> Result<Vec<RegValue>, RegistryError> {
            match self.keys.get(&(hive, path.to_string())) {
                Some(key) => Ok(key.values.clone()),
                None => Err(RegistryError::NotFound),
            }
        }

        fn read_value(
            &self,
            hive: RegistryHive,
            path: &str,
            name: &str,
        ) -> Result<RegValue, RegistryError> {
            let key = match self.keys.get(&(hive, path.to_string())) {
                Some(key) => key,
                None => return Err(RegistryError::NotFound),
            };
            for value in &key.values {
                if value.name == name {
                    return Ok(value.clone());
                }
            }
            Err(RegistryError::NotFound)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::StubRegistry;
        use crate::artifacts::os::windows::registry::{
            error::RegistryError,
            reader::{RegistryHive, RegistryReader},
            values::RegValue,
        };

        #[test]
        fn test_stub_registry() {
            let mut stub = StubRegistry::default();
            stub.insert_key(
                RegistryHive::CurrentUser,
                "Software\\Test",
                vec![String::from("Child")],
                vec![RegValue {
                    name: String::from("a"),
                    reg_type: 1,
                    data: vec![0, 0],
                }],
            );

            stub.open_key(RegistryHive::CurrentUser, "Software\\Test")
                .unwrap();
            let children = stub
                .enumerate_children(RegistryHive::CurrentUser, "Software\\Test")
                .unwrap();
            assert_eq!(children, ["Child"]);

            let values = stub
                .enumerate_values(RegistryHive::CurrentUser, "Software\\Test")
                .unwrap();
            assert_eq!(values.len(), 1);

            let value = stub
                .read_value(RegistryHive::CurrentUser, "Software\\Test", "a")
                .unwrap();
            assert_eq!(value.reg_type, 1);

            let missing = stub.open_key(RegistryHive::LocalMachine, "Software\\Test");
            assert_eq!(missing, Err(RegistryError::NotFound));
        }
    }
}
