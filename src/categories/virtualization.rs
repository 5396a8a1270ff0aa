use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

pub struct Virtualization;

impl Cleaner for Virtualization {
    fn name(&self) -> &'static str {
        "virtualization"
    }

    fn label(&self) -> &'static str {
        "Virtualization"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let mut targets = vec![CleanupTarget::at(layout.home_path(".vagrant.d/tmp"), layout)];

        // VirtualBox keeps a Logs directory inside every VM folder.
        if let Ok(read_dir) = std::fs::read_dir(layout.home_path("VirtualBox VMs")) {
            let mut vm_logs: Vec<CleanupTarget> = read_dir
                .flatten()
                .map(|vm| vm.path().join("Logs"))
                .filter(|logs| logs.is_dir())
                .map(|logs| CleanupTarget::at(logs, layout))
                .collect();
            vm_logs.sort_by(|a, b| a.path.cmp(&b.path));
            targets.extend(vm_logs);
        }

        targets
    }
}
