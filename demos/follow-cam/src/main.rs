// follow-cam demo
//
// Drives every tether-kit system through a simulated 120-frame loop: a camera
// follows an orbiting target, a prop spins, slow motion kicks in mid-run, and
// a countdown fires a contact event through the router when it expires.

use glam::{Quat, Vec3};
use tether_kit::{
    ContactEvent, ContactKind, ContactRouter, Countdown, EventPhase, FollowConfig, Follower,
    RotatorConfig, Rotator, TimeControl, TransformSnapshot, TransformState,
};

const RAW_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 120;

fn main() {
    env_logger::init();

    let mut time = TimeControl::with_factor(0.25);
    let mut follower = Follower::new(
        FollowConfig::default()
            .with_position_rate(4.0)
            .with_rotation_rate(4.0)
            .with_snap_on_start(true),
    );
    let rotator = Rotator::new(
        RotatorConfig::default()
            .with_axis(Vec3::Y)
            .with_speed_deg(90.0),
    );
    let mut countdown = Countdown::new(1.0);

    let mut router = ContactRouter::with_tags(["Player"]);
    router.on_enter(|contact: &ContactEvent| {
        log::info!("contact enter from #{} ({:?})", contact.other, contact.kind);
    });

    let mut cam = TransformSnapshot::default();
    let mut prop = Quat::IDENTITY;

    for frame in 0..FRAMES {
        if frame == 40 {
            time.activate();
            println!("-- slow motion on (scale {}) --", time.scale());
        }
        if frame == 80 {
            time.deactivate();
            println!("-- slow motion off --");
        }

        let dt = time.scaled(RAW_DT);

        // Scripted target: a slow orbit around the origin.
        let angle = frame as f32 * 0.05;
        let target = TransformSnapshot::uniform(TransformState::new(
            Vec3::new(angle.cos() * 5.0, 1.0, angle.sin() * 5.0),
            Quat::from_rotation_y(angle),
        ));

        follower.advance(&cam, &target, dt).apply_to(&mut cam);

        if let Some((_, delta)) = rotator.tick(dt) {
            prop = delta * prop;
        }

        if countdown.tick(dt) {
            let contact = ContactEvent {
                kind: ContactKind::Sensor,
                other: 7,
                tag: "Player".into(),
            };
            let result = router.dispatch(EventPhase::Enter, "Player", &contact);
            println!("-- countdown expired at frame {frame}, dispatch: {result:?} --");
        }

        if frame % 20 == 0 {
            let gap = (target.world.position - cam.world.position).length();
            println!(
                "frame {frame:3}  cam {:6.2} {:6.2} {:6.2}  gap {gap:5.2}  prop yaw {:6.1}°",
                cam.world.position.x,
                cam.world.position.y,
                cam.world.position.z,
                prop.to_euler(glam::EulerRot::YXZ).0.to_degrees(),
            );
        }
    }
}
