use inference::{Device, InferError};

#[test]
fn test_device_parse() {
    assert_eq!("cpu".parse::<Device>().unwrap(), Device::Cpu);
    assert_eq!(" CPU ".parse::<Device>().unwrap(), Device::Cpu);
    assert_eq!("cuda".parse::<Device>().unwrap(), Device::Cuda { device_id: 0 });
    assert_eq!("cuda:1".parse::<Device>().unwrap(), Device::Cuda { device_id: 1 });
}

#[test]
fn test_device_parse_rejects_unknown() {
    for name in ["", "gpu", "cuda:", "cuda:-1", "cuda:x", "cpu:0", "tensorrt"] {
        assert!(
            matches!(name.parse::<Device>(), Err(InferError::InvalidDevice(_))),
            "{name:?} should not parse"
        );
    }
}

#[test]
fn test_device_display() {
    assert_eq!(Device::Cpu.to_string(), "CPU");
    assert_eq!(Device::Cuda { device_id: 2 }.to_string(), "CUDA(device_id=2)");
}

