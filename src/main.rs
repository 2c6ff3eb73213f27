mod scenes;

use crate::scenes::ScenesType;
use glint::aliases::{Color, RandGen};
use glint::ray_color;
use glint::scene::Scene;
use log::{error, info};
use rand::{Rng, SeedableRng};
use std::sync::mpsc::channel;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

const IMAGE_WIDTH: i32 = 600;
const IMAGE_HEIGHT: i32 = 600;
const RAYS_PER_PIXEL: i32 = 1000;
const MAX_DEPTH: i32 = 50;
const THREAD_CNT: i32 = 4;
const REPORT_INTERVAL: i32 = 100;
// each worker renders from its own stream seeded with BASE_SEED + index,
// so runs are reproducible and workers never contend on a generator
const BASE_SEED: u64 = 0x5eed;
const FILE_PATH_PREFIX: &str = "render";

struct ColorSum {
    nx: i32,
    ny: i32,
    pub count: i32,
    pub sum: Vec<Color>,
}

impl ColorSum {
    pub fn zero(nx: i32, ny: i32) -> Self {
        ColorSum {
            nx,
            ny,
            count: 0,
            sum: vec![Color::new(0.0, 0.0, 0.0); (nx as usize) * (ny as usize)],
        }
    }
    pub fn replace_zero(&mut self) -> ColorSum {
        let (x, y) = (self.nx, self.ny);
        std::mem::replace(self, ColorSum::zero(x, y))
    }
    pub fn add(&mut self, rhs: ColorSum) {
        debug_assert_eq!((self.nx, self.ny), (rhs.nx, rhs.ny));
        self.count += rhs.count;
        for i in 0..((self.nx as usize) * (self.ny as usize)) {
            self.sum[i] += rhs.sum[i];
        }
    }
    /// Averages the accumulated samples, applies gamma 2 and writes a png.
    pub fn save_png(&self, name: &str) -> image::ImageResult<()> {
        debug_assert!(self.count > 0);
        let mut buffer: Vec<u8> = vec![0; (self.nx as usize) * (self.ny as usize) * 4];
        for i in 0..self.nx {
            for j in 0..self.ny {
                let idx = (i + j * self.nx) as usize;
                let col = self.sum[idx] / self.count as f32;
                for ch in 0..3 {
                    buffer[idx * 4 + ch] = (255.999 * col[ch].max(0.0).sqrt().min(1.0)) as u8;
                }
                buffer[idx * 4 + 3] = 255;
            }
        }
        image::save_buffer(
            &format!("{}_{}spp.png", name, self.count),
            buffer.as_slice(),
            self.nx as u32,
            self.ny as u32,
            image::ColorType::Rgba8,
        )
    }
}

fn trace_rays(
    nx: i32,
    ny: i32,
    ns: i32,
    max_depth: i32,
    scene: &Scene,
    seed: u64,
    report_interval: i32,
    tx: Sender<ColorSum>,
) {
    let mut rng = RandGen::seed_from_u64(seed);
    let mut color_sum = ColorSum::zero(nx, ny);
    for _ in 0..ns {
        for i in 0..nx {
            for j in 0..ny {
                let u = (i as f32 + rng.gen::<f32>()) / nx as f32;
                let v = (j as f32 + rng.gen::<f32>()) / ny as f32;
                let ray = scene.camera.get_ray(u, v, &mut rng);
                let col = ray_color(&ray, scene, &mut rng, max_depth);
                let idx = (i + (ny - j - 1) * nx) as usize;
                color_sum.sum[idx] += col;
            }
        }
        color_sum.count += 1;
        if color_sum.count % report_interval == 0 {
            tx.send(color_sum.replace_zero()).unwrap();
        }
    }
    tx.send(color_sum.replace_zero()).unwrap();
}

fn main() {
    env_logger::init();
    let start_time = Instant::now();
    let aspect = IMAGE_WIDTH as f32 / IMAGE_HEIGHT as f32;
    if RAYS_PER_PIXEL % THREAD_CNT != 0 {
        error!("RAYS_PER_PIXEL must be a multiple of THREAD_CNT");
        std::process::exit(1);
    }
    if REPORT_INTERVAL % THREAD_CNT != 0 {
        error!("REPORT_INTERVAL must be a multiple of THREAD_CNT");
        std::process::exit(1);
    }
    info!(
        "{}x{} image, {} rays per pixel, {} threads",
        IMAGE_WIDTH, IMAGE_HEIGHT, RAYS_PER_PIXEL, THREAD_CNT
    );
    let scene = match scenes::get(ScenesType::CornellBox, aspect) {
        Ok(scene) => scene,
        Err(err) => {
            error!("scene rejected: {}", err);
            std::process::exit(1);
        }
    };
    info!(
        "scene constructed ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );
    let rays_per_thread = RAYS_PER_PIXEL / THREAD_CNT;

    crossbeam::thread::scope(|scope| {
        let (tx, cx) = channel::<ColorSum>();
        let mut opt_tx = Some(tx);
        let mut threads: Vec<crossbeam::thread::ScopedJoinHandle<'_, ()>> = Vec::new();
        for worker in 0..THREAD_CNT {
            let tx = opt_tx.as_ref().unwrap().clone();
            let scene = &scene;
            let th = scope.spawn(move |_| {
                trace_rays(
                    IMAGE_WIDTH,
                    IMAGE_HEIGHT,
                    rays_per_thread,
                    MAX_DEPTH,
                    scene,
                    BASE_SEED + worker as u64,
                    REPORT_INTERVAL / THREAD_CNT,
                    tx,
                );
            });
            threads.push(th);
        }
        opt_tx.take(); // without this the accumulator never sees the channel close
        let save_thread = scope.spawn(move |_| {
            let mut current = ColorSum::zero(IMAGE_WIDTH, IMAGE_HEIGHT);
            let mut cnt = 0;
            while let Ok(res) = cx.recv() {
                current.add(res);
                cnt += 1;
                if cnt % THREAD_CNT == 0 {
                    info!(
                        "{} samples per pixel accumulated ({:.3} secs elapsed)",
                        current.count,
                        duration_to_secs(&start_time.elapsed())
                    );
                    if let Err(err) = current.save_png(FILE_PATH_PREFIX) {
                        error!("failed to write image: {}", err);
                    }
                }
            }
        });
        for th in threads {
            th.join().unwrap();
        }
        save_thread.join().unwrap();
    })
    .unwrap();
    info!(
        "completed ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );
}

fn duration_to_secs(dur: &Duration) -> f32 {
    dur.as_secs() as f32 + dur.subsec_millis() as f32 * 0.001
}
