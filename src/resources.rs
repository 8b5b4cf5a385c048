//! Icon bitmaps and their caches
//!
//! Icons are bundled as `icons.<name>.png` and loaded through a
//! [`ResourceLoader`]. Decoded bitmaps and recolored variants are kept in
//! bounded LRU caches; both sit behind a mutex so one [`IconCache`] can serve
//! a host that calls back from several threads.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::format::Rgb;
use crate::log::{debug, warn};

/// Entries kept by each cache
pub const CACHE_CAPACITY: usize = 1024;

/// Shown for controls without an icon of their own
pub const FALLBACK_ICON: &str = "icons.question.png";

/// Resource name of the bundled icon `name`
pub fn icon_resource(name: &str) -> String {
    format!("icons.{name}.png")
}

/// A decoded image, one `0xAARRGGBB` value per pixel, row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl Bitmap {
    /// `None` unless `pixels` holds exactly `width * height` values
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Option<Bitmap> {
        (pixels.len() == width as usize * height as usize).then_some(Bitmap { width, height, pixels })
    }

    pub fn filled(width: u32, height: u32, argb: u32) -> Bitmap {
        Bitmap { width, height, pixels: vec![argb; width as usize * height as usize] }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Replace the color of every pixel, keeping its alpha.
    ///
    /// Pixels whose color appears in `replacements` get the mapped color,
    /// all others get `color`.
    pub fn recolor(&self, color: Rgb, replacements: &[(Rgb, Rgb)]) -> Bitmap {
        let pixels = self
            .pixels
            .iter()
            .map(|&argb| {
                let (alpha, rgb) = split_argb(argb);
                let target = replacements.iter().find(|(from, _)| *from == rgb).map_or(color, |(_, to)| *to);
                join_argb(alpha, target)
            })
            .collect();
        Bitmap { width: self.width, height: self.height, pixels }
    }
}

fn split_argb(argb: u32) -> (u8, Rgb) {
    let [a, r, g, b] = argb.to_be_bytes();
    (a, Rgb::new(r, g, b))
}

fn join_argb(alpha: u8, rgb: Rgb) -> u32 {
    u32::from_be_bytes([alpha, rgb.r, rgb.g, rgb.b])
}

/// Source of bundled resources
pub trait ResourceLoader: Send + Sync {
    /// The decoded image `name`, or `None` when there is no such image
    fn load(&self, name: &str) -> Option<Bitmap>;
}

/// Resources registered up front, for hosts that bundle decoded images
#[derive(Debug, Default)]
pub struct BundledResources {
    images: HashMap<String, Bitmap>,
}

impl BundledResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bitmap: Bitmap) {
        self.images.insert(name.into(), bitmap);
    }

    pub fn with(mut self, name: impl Into<String>, bitmap: Bitmap) -> Self {
        self.insert(name, bitmap);
        self
    }
}

impl ResourceLoader for BundledResources {
    fn load(&self, name: &str) -> Option<Bitmap> {
        self.images.get(name).cloned()
    }
}

type RecolorKey = (String, Rgb, Vec<(Rgb, Rgb)>);

pub struct IconCache {
    loader: Box<dyn ResourceLoader>,
    images: Mutex<LruCache<String, Option<Arc<Bitmap>>>>,
    recolored: Mutex<LruCache<RecolorKey, Arc<Bitmap>>>,
}

impl IconCache {
    pub fn new(loader: impl ResourceLoader + 'static) -> Self {
        Self::with_capacity(loader, CACHE_CAPACITY)
    }

    pub fn with_capacity(loader: impl ResourceLoader + 'static, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        IconCache {
            loader: Box::new(loader),
            images: Mutex::new(LruCache::new(capacity)),
            recolored: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Load a resource by its full name; misses are cached too
    pub fn load(&self, resource: &str) -> Option<Arc<Bitmap>> {
        let mut images = self.images.lock();
        if let Some(cached) = images.get(resource) {
            return cached.clone();
        }
        debug!("loading resource {}", resource);
        let loaded = self.loader.load(resource).map(Arc::new);
        images.put(resource.to_string(), loaded.clone());
        loaded
    }

    /// The icon `name`, falling back to the question mark icon
    pub fn icon(&self, name: &str) -> Option<Arc<Bitmap>> {
        let resource = icon_resource(name);
        self.load(&resource).or_else(|| {
            warn!("missing icon {}, using {}", resource, FALLBACK_ICON);
            self.load(FALLBACK_ICON)
        })
    }

    /// `bitmap` (loaded as `resource`) recolored with [`Bitmap::recolor`]
    pub fn recolor(&self, resource: &str, bitmap: &Bitmap, color: Rgb, replacements: &[(Rgb, Rgb)]) -> Arc<Bitmap> {
        let key = (resource.to_string(), color, replacements.to_vec());
        let mut recolored = self.recolored.lock();
        if let Some(cached) = recolored.get(&key) {
            return cached.clone();
        }
        let result = Arc::new(bitmap.recolor(color, replacements));
        recolored.put(key, result.clone());
        result
    }

    /// The icon `name` in a single color
    pub fn tinted(&self, name: &str, color: Rgb) -> Option<Arc<Bitmap>> {
        let bitmap = self.icon(name)?;
        Some(self.recolor(&icon_resource(name), &bitmap, color, &[]))
    }

    pub fn len(&self) -> usize {
        self.images.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        inner: BundledResources,
        calls: Arc<AtomicUsize>,
    }

    impl ResourceLoader for CountingLoader {
        fn load(&self, name: &str) -> Option<Bitmap> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.load(name)
        }
    }

    fn question() -> Bitmap {
        Bitmap::filled(2, 2, 0xff00_0000)
    }

    #[test]
    fn recolor_keeps_alpha() {
        let bitmap = Bitmap::new(2, 1, vec![0x80ff_0000, 0x0000_00ff]).unwrap();
        let red = Rgb::new(255, 0, 0);
        let out = bitmap.recolor(Rgb::new(1, 2, 3), &[(red, Rgb::WHITE)]);
        assert_eq!(out.pixels, vec![0x80ff_ffff, 0x0001_0203]);
    }

    #[test]
    fn bitmap_size_is_checked() {
        assert!(Bitmap::new(2, 2, vec![0; 3]).is_none());
        assert_eq!(question().pixel(1, 1), Some(0xff00_0000));
        assert_eq!(question().pixel(2, 0), None);
    }

    #[test]
    fn pixel_index_does_not_wrap() {
        // 65536 * 65536 wraps to 0 in u32
        let wide = Bitmap { width: 65_536, height: 65_537, pixels: vec![7] };
        assert_eq!(wide.pixel(0, 0), Some(7));
        assert_eq!(wide.pixel(0, 65_536), None);
    }

    #[test]
    fn missing_icons_fall_back() {
        let cache = IconCache::new(BundledResources::new().with(FALLBACK_ICON, question()));
        assert_eq!(cache.icon("nothing_here").as_deref(), Some(&question()));
        assert!(IconCache::new(BundledResources::new()).icon("nothing_here").is_none());
    }

    #[test]
    fn loads_are_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            inner: BundledResources::new().with(icon_resource("swap_text"), question()),
            calls: calls.clone(),
        };
        let cache = IconCache::new(loader);
        cache.icon("swap_text");
        cache.icon("swap_text");
        cache.load("icons.absent.png");
        cache.load("icons.absent.png");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn capacity_bounds_the_cache() {
        let cache = IconCache::with_capacity(BundledResources::new(), 2);
        for name in ["a", "b", "c"] {
            cache.load(name);
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn tinted_icons_are_shared() {
        let cache = IconCache::new(BundledResources::new().with(icon_resource("fill"), question()));
        let first = cache.tinted("fill", Rgb::WHITE).unwrap();
        let second = cache.tinted("fill", Rgb::WHITE).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.pixels, vec![0xffff_ffff; 4]);
    }
}
