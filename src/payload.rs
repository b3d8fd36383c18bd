//! Payload builders for common QR contents

use crate::error::{Error, Result};

/// Wi-Fi network authentication scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiAuth {
    /// WEP (legacy)
    Wep,
    /// WPA
    Wpa,
    /// WPA2
    Wpa2,
    /// Mixed WPA/WPA2
    WpaWpa2,
    /// Open network, no password
    NoPass,
}

impl WifiAuth {
    /// Parse an auth scheme name, case-insensitively
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "WEP" => Ok(WifiAuth::Wep),
            "WPA" => Ok(WifiAuth::Wpa),
            "WPA2" => Ok(WifiAuth::Wpa2),
            "WPA/WPA2" => Ok(WifiAuth::WpaWpa2),
            "NOPASS" => Ok(WifiAuth::NoPass),
            _ => Err(Error::InvalidConfiguration(
                "auth must be WEP, WPA, WPA2, WPA/WPA2, or nopass",
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            WifiAuth::Wep => "WEP",
            WifiAuth::Wpa => "WPA",
            WifiAuth::Wpa2 => "WPA2",
            WifiAuth::WpaWpa2 => "WPA/WPA2",
            WifiAuth::NoPass => "NOPASS",
        }
    }
}

/// Build the Wi-Fi network QR payload string.
///
/// Backslash-escapes the `\ ; , :` characters in the SSID and password;
/// open networks carry an empty password field.
pub fn wifi_payload(ssid: &str, password: &str, auth: WifiAuth, hidden: bool) -> String {
    let escaped_ssid = escape(ssid);
    let escaped_password = if auth == WifiAuth::NoPass {
        String::new()
    } else {
        escape(password)
    };
    let hidden_flag = if hidden { "true" } else { "false" };
    format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        auth.as_str(),
        escaped_ssid,
        escaped_password,
        hidden_flag
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
