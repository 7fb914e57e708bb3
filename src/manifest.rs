//! The fixed set of assets one run produces

/// One asset to render and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetJob {
    Icon {
        size: u32,
        maskable: bool,
        file_name: &'static str,
    },
    Screenshot {
        width: u32,
        height: u32,
        label: &'static str,
        file_name: &'static str,
    },
}

impl AssetJob {
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetJob::Icon { file_name, .. } => file_name,
            AssetJob::Screenshot { file_name, .. } => file_name,
        }
    }
}

/// The six fixed assets, in generation order: standard icons, maskable
/// icons, then screenshots.
pub fn manifest() -> [AssetJob; 6] {
    [
        AssetJob::Icon {
            size: 192,
            maskable: false,
            file_name: "icon-192.png",
        },
        AssetJob::Icon {
            size: 512,
            maskable: false,
            file_name: "icon-512.png",
        },
        AssetJob::Icon {
            size: 192,
            maskable: true,
            file_name: "icon-maskable-192.png",
        },
        AssetJob::Icon {
            size: 512,
            maskable: true,
            file_name: "icon-maskable-512.png",
        },
        AssetJob::Screenshot {
            width: 540,
            height: 720,
            label: "Dashboard View",
            file_name: "screenshot-540.png",
        },
        AssetJob::Screenshot {
            width: 1280,
            height: 720,
            label: "Configuration Panel",
            file_name: "screenshot-1280.png",
        },
    ]
}
