use fastconv::report::{format_complex, format_real};
use fastconv::{ComplexToRealExecutor, RealToComplexExecutor};

fn main() {
    let signal = [1.0f64, 2.0, 3.0, 4.0, 5.0];
    let n = 8;

    let mut fft = RealToComplexExecutor::new(n).expect("executor creation");
    fft.set_input_zeropadded(&signal).unwrap();
    fft.execute().unwrap();
    println!("Padded input: {}", format_real(fft.input()));
    println!("Spectrum ({} bins): {}", fft.output_size(), format_complex(fft.output()));

    let mut ifft = ComplexToRealExecutor::new(n).expect("executor creation");
    ifft.set_input(fft.output()).unwrap();
    ifft.execute().unwrap();
    // The inverse transform is unnormalized.
    let restored: Vec<f64> = ifft.output().iter().map(|x| x / n as f64).collect();
    println!("Reconstructed: {}", format_real(&restored));
}
