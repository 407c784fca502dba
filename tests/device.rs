//! End-to-end runs against sysfs-shaped files in a temp directory.

use std::fs;
use std::path::PathBuf;

use overscan::store::PositionStore;
use overscan::sysfs::{DeviceOutputMode, SysfsWriter};
use overscan::{OverscanController, Position, Tuning};
use tempfile::TempDir;

struct Device {
    _dir: TempDir,
    mode: PathBuf,
    axis: PathBuf,
    osd: PathBuf,
    settings: PathBuf,
}

impl Device {
    fn new(mode: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        let device = Self {
            mode: root.join("mode"),
            axis: root.join("window_axis"),
            osd: root.join("osd_mouse"),
            settings: root.join("data").join("positions.json"),
            _dir: dir,
        };
        device.set_mode(mode);
        device
    }

    fn set_mode(&self, mode: &str) {
        fs::write(&self.mode, format!("{mode}\n")).unwrap();
    }

    fn controller(&self) -> OverscanController<DeviceOutputMode, SysfsWriter> {
        let provider =
            DeviceOutputMode::new(&self.mode, PositionStore::new(&self.settings)).with_osd_mouse(&self.osd);
        OverscanController::with_settings(provider, SysfsWriter, self.axis.to_string_lossy(), Tuning::default())
            .unwrap()
    }

    fn axis(&self) -> String {
        fs::read_to_string(&self.axis).unwrap()
    }
}

#[test]
fn fresh_device_starts_at_full_canvas() {
    let dev = Device::new("1080p60hz");
    let ctl = dev.controller();
    assert_eq!(ctl.current_percent(), 100);
    assert_eq!(ctl.rectangle().position(), Position::new(0, 0, 1920, 1080));
    assert!(!ctl.is_position_changed());
}

#[test]
fn zoom_out_writes_axis_and_persists() {
    let dev = Device::new("1080p60hz");
    let mut ctl = dev.controller();

    ctl.zoom_by_percent(80).unwrap();

    assert_eq!(dev.axis(), "95 53 1824 1026");
    assert_eq!(fs::read_to_string(&dev.osd).unwrap(), "95 53 1730 974");
    let stored = PositionStore::new(&dev.settings).get("1080p60hz").unwrap();
    assert_eq!(stored, Some(Position::new(95, 53, 1730, 974)));
}

#[test]
fn restart_recovers_percent_from_saved_position() {
    let dev = Device::new("1080p60hz");
    dev.controller().zoom_by_percent(90).unwrap();

    let ctl = dev.controller();
    assert_eq!(ctl.current_percent(), 90);
    assert_eq!(ctl.rectangle().position(), Position::new(47, 26, 1826, 1028));
    assert!(!ctl.is_position_changed());
}

#[test]
fn positions_are_kept_per_mode() {
    let dev = Device::new("1080p60hz");
    dev.controller().zoom_by_percent(80).unwrap();

    dev.set_mode("720p60hz");
    let mut ctl = dev.controller();
    assert_eq!(ctl.current_percent(), 100);
    ctl.zoom_out().unwrap();
    // 1 * 1279 / 400 = 3, 1 * 719 / 400 = 1
    assert_eq!(dev.axis(), "3 1 1276 718");

    let store = PositionStore::new(&dev.settings);
    assert_eq!(store.get("1080p60hz").unwrap(), Some(Position::new(95, 53, 1730, 974)));
    assert_eq!(store.get("720p60hz").unwrap(), Some(Position::new(3, 1, 1274, 718)));
}

#[test]
fn absolute_position_is_written_verbatim() {
    let dev = Device::new("1080p60hz");
    let mut ctl = dev.controller();
    ctl.zoom_by_position(10, 20, 100, 50).unwrap();
    assert_eq!(dev.axis(), "10 20 109 69");
    assert_eq!(
        PositionStore::new(&dev.settings).get("1080p60hz").unwrap(),
        Some(Position::new(10, 20, 100, 50))
    );
}

#[test]
fn missing_axis_node_is_reported_but_position_is_saved() {
    let dev = Device::new("1080p60hz");
    let provider = DeviceOutputMode::new(&dev.mode, PositionStore::new(&dev.settings));
    let mut ctl = OverscanController::with_settings(
        provider,
        SysfsWriter,
        dev.axis.join("missing").to_string_lossy(),
        Tuning::default(),
    )
    .unwrap();

    let err = ctl.zoom_out().unwrap_err();
    assert_eq!(err.error_code(), "E_SYSFS");
    assert!(PositionStore::new(&dev.settings).get("1080p60hz").unwrap().is_some());
}

#[test]
fn out_of_range_saved_entry_still_initialises() {
    let dev = Device::new("1080p60hz");
    fs::create_dir_all(dev.settings.parent().unwrap()).unwrap();
    fs::write(&dev.settings, r#"{"1080p60hz":{"left":6000000,"top":0,"width":10,"height":10}}"#).unwrap();

    let mut ctl = dev.controller();
    assert_eq!(ctl.current_percent(), 100);
    ctl.zoom_out().unwrap();
    assert_eq!(dev.axis(), "4 2 1915 1077");
}
