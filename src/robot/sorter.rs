//! # Item Sorter Robot
//!
//! Turns an inventory bin into a URScript pick-and-place program and ships it to the
//! controller. Each program is preceded by a brake-release command on the dashboard
//! port, so every pick costs exactly two connections.

use tracing::{debug, instrument};

use super::{CommandTransmitter, RobotError};
use crate::config::RobotConfig;
use crate::model::InventoryLocation;

/// Formats a coordinate in metres for the motion script.
///
/// At least one and at most four fractional digits, trailing zeros trimmed, always a
/// `.` separator: `0.1`, `0.25`, `0.1235`, `1.0`.
pub fn format_coordinate(metres: f64) -> String {
    let mut text = format!("{metres:.4}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// The URScript program that moves one item from its bin into the shipment box.
///
/// The shipment box sits at (0.3, 0.3). The arm dips to 0.1 m at each end, pausing to
/// grasp at the bin and to release over the box.
pub fn motion_script(item_x: &str) -> String {
    format!(
        r#"

def move_item_to_shipment_box():
    SBOX_X = 0.3
    SBOX_Y = 0.3
    ITEM_X = {item_x}
    ITEM_Y = 0.1
    DOWN_Z = 0.1

    def moveto(x, y, z = 0.0):
        movej(p[x, y, z, 0, 0, 0], a=1.2, v=0.25)
        sleep(0.5)
    end

    # go to item box and dip down
    moveto(ITEM_X, ITEM_Y, 0.0)
    moveto(ITEM_X, ITEM_Y, DOWN_Z)
    sleep(0.5) # grasp assumed
    moveto(ITEM_X, ITEM_Y, 0.0)

    # go to shipment box S and dip down
    moveto(SBOX_X, SBOX_Y, 0.0)
    moveto(SBOX_X, SBOX_Y, DOWN_Z)
    sleep(0.5) # release assumed
    moveto(SBOX_X, SBOX_Y, 0.0)
end
"#
    )
}

/// Pick-and-place robot composed over a [`CommandTransmitter`].
#[derive(Debug, Clone)]
pub struct ItemSorterRobot<T: CommandTransmitter> {
    transmitter: T,
    dashboard_port: u16,
    script_port: u16,
    brake_release_command: String,
}

impl<T: CommandTransmitter> ItemSorterRobot<T> {
    pub fn new(transmitter: T, config: &RobotConfig) -> Self {
        Self {
            transmitter,
            dashboard_port: config.dashboard_port,
            script_port: config.script_port,
            brake_release_command: config.brake_release_command.clone(),
        }
    }

    /// Releases the brakes, then hands `script` to the interpreter.
    ///
    /// Two independent connections, in that order. A failure on the first means the
    /// script is never sent.
    pub async fn send_urscript(&self, script: &str) -> Result<(), RobotError> {
        self.transmitter
            .send_string(self.dashboard_port, &self.brake_release_command)
            .await?;
        self.transmitter.send_string(self.script_port, script).await
    }

    /// Moves one unit from `location` into the shipment box.
    #[instrument(skip(self, location), fields(location = %location))]
    pub async fn pick_up(&self, location: InventoryLocation) -> Result<(), RobotError> {
        let item_x = format_coordinate(location.x_coordinate());
        debug!(%item_x, "Generated motion script");
        self.send_urscript(&motion_script(&item_x)).await
    }
}
