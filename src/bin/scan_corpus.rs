//! Runs the fixed text corpus through the `computador` automaton and reports, per
//! text, how many tokens it accepted and at which 1-based positions.

use owo_colors::OwoColorize;
use recognizer::prelude::*;

/// The fixed corpus of text blocks to scan.
const TEXTS: [&str; 15] = [
    "No mundo moderno, o computador se tornou uma peça essencial no nosso cotidiano. Desde o momento em que acordamos até a hora de dormir, interagimos com computadores de diferentes formas.",
    "A revolução digital foi impulsionada pelo surgimento e aprimoramento do computador. Esse dispositivo, inicialmente projetado para processar cálculos complexos, acabou se transformando em uma ferramenta multifuncional.",
    "Quando se trata de inovação, a evolução do computador é um dos exemplos mais marcantes. Desde as antigas máquinas de calcular até os modernos computadores pessoais, testemunhamos uma revolução tecnológica sem precedentes.",
    "Nos dias de hoje, os computadores são ferramentas indispensáveis em praticamente todas as áreas da sociedade. Na educação, eles estão presentes nas salas de aula, auxiliando professores e alunos.",
    "O desenvolvimento da tecnologia de computadores tem revolucionado a forma como trabalhamos. Antes, a maioria das tarefas era feita manualmente, exigindo tempo e esforço significativos. Com o advento do computador.",
    "Eu adoro passar horas navegando na internet no meu computador.",
    "No parque, as crianças brincavam despreocupadas, sem a necessidade de um computador.",
    "Os avanços tecnológicos revolucionaram a forma como utilizamos o computador no dia a dia.",
    "O pintor contemplava a paisagem, buscando inspiração sem se importar com o mundo dos computadores.",
    "No escritório, a máquina de escrever foi substituída pelo computador, trazendo mais eficiência e praticidade.",
    "\nNos tempos modernos, o computador se tornou uma ferramenta indispensável em praticamente todas as áreas da vida. Seja no trabalho, nos estudos ou até mesmo no lazer, é difícil imaginar como seriam nossas vidas sem essa máquina incrível. O computador é capaz de processar informações em velocidades impressionantes e executar tarefas complexas em questão de segundos. Além disso, com o avanço da tecnologia, os computadores se tornaram cada vez mais compactos e portáteis, permitindo que as pessoas os levem para qualquer lugar. É inegável o impacto que o computador teve na sociedade moderna e as infinitas possibilidades que ele oferece.\n",
    "\nQuando se trata da área médica, o computador desempenha um papel crucial. Os sistemas computadorizados permitem armazenar e acessar com facilidade os prontuários dos pacientes, agilizando o processo de diagnóstico e tratamento. Além disso, a tecnologia avançada dos computadores possibilita a realização de exames médicos de alta precisão, como tomografias e ressonâncias magnéticas, auxiliando os médicos no diagnóstico de doenças complexas. Os profissionais de saúde também utilizam computadores para acessar informações atualizadas sobre medicamentos, pesquisas e avanços na área médica. Em resumo, o computador revolucionou a prática da medicina, tornando-a mais eficiente e precisa.\n",
    "\nNa atualidade, a telemedicina tem se tornado cada vez mais comum, e isso não seria possível sem a presença do computador. Através de videoconferências e plataformas online, médicos podem realizar consultas à distância, ampliando o acesso aos cuidados de saúde, principalmente em regiões remotas. Além disso, o uso de softwares médicos especializados permite a troca de informações e resultados de exames de forma rápida e segura. O computador se tornou uma ferramenta essencial para a prática da telemedicina, proporcionando uma nova forma de atendimento médico que beneficia pacientes e profissionais. Sem dúvida, a tecnologia continua a avançar, e o papel do computador na área médica continuará a se expandir, oferecendo novas possibilidades e soluções inovadoras.\n",
    "\nNo campo do desenvolvimento de software, o computador é uma ferramenta indispensável. Desde a codificação e depuração de programas até a execução de testes e análise de desempenho, o computador desempenha um papel central em todas as etapas do processo. Os desenvolvedores utilizam ambientes de desenvolvimento integrados (IDEs) para escrever e editar código, aproveitando recursos como sugestões de autocompletar e depuradores para identificar e corrigir erros. Além disso, o poder de processamento dos computadores modernos permite a criação de aplicativos cada vez mais complexos e robustos. O computador é a ferramenta essencial que impulsiona a inovação no desenvolvimento de software, capacitando os profissionais a criar soluções tecnológicas avançadas para atender às demandas do mundo digital.\n",
    "\nNo mundo do desenvolvimento de software, a colaboração entre equipes é facilitada pelo uso de computadores conectados em rede. As ferramentas de controle de versão, como o Git, permitem que vários desenvolvedores trabalhem em um mesmo projeto simultaneamente, realizando alterações e integrando seu código de forma organizada. Os computadores também são utilizados para hospedar repositórios de código-fonte, facilitando o compartilhamento e o controle de versões. Além disso, as equipes de desenvolvimento podem usar plataformas de comunicação online, como chats e videoconferências, para trocar ideias, discutir problemas e coordenar esforços. O computador se tornou o elo essencial que une desenvolvedores de software, permitindo uma colaboração eficiente e uma produção de alta qualidade.\n",
];

fn main() {
    tracing_subscriber::fmt::init();

    let dfa = samples::computador();
    for (index, text) in TEXTS.iter().enumerate() {
        let report = dfa.scan(text);
        println!("text {}:", index + 1);
        if report.count() == 0 {
            println!("  no occurrences");
        } else {
            println!(
                "  {} occurrence(s) of \"computador\" at position(s) {}",
                report.count().green(),
                report.positions().show()
            );
        }
    }
}
