use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::path::PathBuf;

pub const fn server_listen_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

pub const fn server_port() -> u16 {
    5000
}

pub const fn server_port_tls() -> u16 {
    5443
}

pub fn static_root() -> PathBuf {
    PathBuf::from("static")
}

pub fn campus_data_file() -> PathBuf {
    PathBuf::from("data").join("campus.json")
}

pub const fn log_building_ids() -> bool {
    true
}
