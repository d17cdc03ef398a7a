use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// One watering station, run in list order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub pin: u8,
    pub name: String,
    pub duration_seconds: u32,
}

/// The weekly watering schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub start_offset_from_midnight_seconds: u32,
    pub stations: Vec<Station>,
    /// UNIX time until which the schedule is suspended
    pub disable_until: i64,
    /// Pin forced on for hardware testing, -1 when off
    pub test_station_pin: i32,
    /// UNIX time of a requested manual run, -1 when none
    pub manual_start_time: i64,
}

#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum SprinklerState {
    Idle = 0,
    Testing = 1,
    RunningManual = 2,
    RunningScheduled = 3,
    DisabledUntil = 4,
}

/// Live status pushed by the device while a run progresses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SprinklerStatus {
    /// GPIO currently driven high, -1 when idle
    pub active_pin: i32,
    pub active_station: String,
    pub entered_state_time: i64,
    pub leaving_state_time: i64,
    pub state: SprinklerState,
}
