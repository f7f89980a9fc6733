use {
    crate::*,
    base::Tensor,
    ort::{inputs, session::Session as OrtSession, value::TensorRef},
    std::path::Path,
};

/// A loaded ONNX model with one input.
pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl OnnxSession {
    pub fn load(path: &Path, device: &Device) -> Result<Self, InferError> {
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::Backend(format!("failed to create session builder: {}", e))
        })?;

        builder = match device {
            Device::Cpu => {
                log::info!("onnx: using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!(
                    "onnx: CUDA EP requested (device_id={}), available: {}",
                    device_id,
                    available
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let session = builder.commit_from_file(path).map_err(|e| {
            InferError::ModelLoad(format!("failed to load model from {:?}: {}", path, e))
        })?;

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        log::debug!("onnx: inputs {:?}, outputs {:?}", input_names, output_names);

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }

    /// Feed `input` to the first model input and return every output, in model order.
    pub fn run(&mut self, input: &Tensor<f32>) -> Result<Vec<Tensor<f32>>, InferError> {
        let input_name = self
            .input_names
            .first()
            .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?;
        let tensor_ref = TensorRef::from_array_view((input.shape.clone(), input.data.as_slice()))
            .map_err(|e| InferError::Backend(format!("failed to create tensor ref: {}", e)))?;
        let outputs = self
            .session
            .run(inputs![input_name.as_str() => tensor_ref])
            .map_err(|e| InferError::Backend(format!("inference failed: {}", e)))?;

        let mut result = Vec::with_capacity(self.output_names.len());
        for output_name in &self.output_names {
            let (shape, data) = outputs[output_name.as_str()]
                .try_extract_tensor::<f32>()
                .map_err(|e| {
                    InferError::Backend(format!("output '{}' is not f32: {}", output_name, e))
                })?;
            let shape: Vec<usize> = shape.iter().map(|&dim| dim.max(0) as usize).collect();
            let tensor = Tensor::new(shape, data.to_vec()).map_err(|e| InferError::ShapeMismatch {
                expected: format!("output '{}' consistent with its shape", output_name),
                got: e.to_string(),
            })?;
            result.push(tensor);
        }
        Ok(result)
    }
}
